use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::film::Film;
use crate::math::RGBColor;

pub trait Tonemapper {
    fn map(&self, color: RGBColor) -> [u8; 3];

    /// Writes the linear film untouched to `exr_filename` and the mapped 8-bit image to
    /// `png_filename`, creating parent directories as needed.
    fn write_to_files(
        &self,
        film: &Film<RGBColor>,
        exr_filename: &str,
        png_filename: &str,
    ) -> Result<()> {
        for filename in [exr_filename, png_filename] {
            if let Some(parent) = Path::new(filename).parent() {
                fs::create_dir_all(parent)?;
            }
        }

        exr::prelude::write_rgb_file(exr_filename, film.width, film.height, |x, y| {
            let color = film.at(x, y);
            (color.r(), color.g(), color.b())
        })?;
        log::info!("wrote {}", exr_filename);

        let img = image::RgbImage::from_fn(film.width as u32, film.height as u32, |x, y| {
            image::Rgb(self.map(film.at(x as usize, y as usize)))
        });
        img.save(png_filename)?;
        log::info!("wrote {}", png_filename);
        Ok(())
    }
}

/// Scales each channel by 255 and an exposure factor, truncates, and clamps to [0, 255].
/// No gamma curve is applied.
#[derive(Copy, Clone, Debug)]
pub struct Clamp {
    pub exposure: f32,
}

impl Clamp {
    pub fn new(exposure: f32) -> Clamp {
        Clamp { exposure }
    }

    fn channel(&self, value: f32) -> u8 {
        // `as` saturates and maps NaN to 0
        (value * self.exposure * 255.0) as u8
    }
}

impl Default for Clamp {
    fn default() -> Self {
        Clamp::new(1.0)
    }
}

impl Tonemapper for Clamp {
    fn map(&self, color: RGBColor) -> [u8; 3] {
        [
            self.channel(color.r()),
            self.channel(color.g()),
            self.channel(color.b()),
        ]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_truncates_and_clamps() {
        let tonemapper = Clamp::default();
        assert_eq!(tonemapper.map(RGBColor::new(0.5, 1.0, 0.999)), [127, 255, 254]);
        assert_eq!(tonemapper.map(RGBColor::new(3.0, -0.2, f32::NAN)), [255, 0, 0]);
        assert_eq!(tonemapper.map(RGBColor::BLACK), [0, 0, 0]);
    }

    #[test]
    fn test_exposure_scales_before_clamping() {
        let tonemapper = Clamp::new(2.0);
        assert_eq!(tonemapper.map(RGBColor::new(0.25, 0.6, 0.0)), [127, 255, 0]);
    }

    #[test]
    fn test_write_to_files() {
        let dir = std::env::temp_dir().join(format!("whitted_rt_tonemap_{}", std::process::id()));
        let exr_path = dir.join("film.exr");
        let png_path = dir.join("film.png");
        let mut film = Film::new(8, 4, RGBColor::ZERO);
        film.write_at(3, 1, RGBColor::new(1.0, 0.5, 0.25));

        Clamp::default()
            .write_to_files(
                &film,
                exr_path.to_str().unwrap(),
                png_path.to_str().unwrap(),
            )
            .expect("failed to write film");

        let png = image::open(&png_path).unwrap().to_rgb8();
        assert_eq!(png.dimensions(), (8, 4));
        assert_eq!(png.get_pixel(3, 1).0, [255, 127, 63]);
        assert_eq!(png.get_pixel(0, 0).0, [0, 0, 0]);
        assert!(exr_path.exists());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
