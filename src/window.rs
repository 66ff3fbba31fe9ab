use minifb::{Key, Window, WindowOptions};

use crate::error::Result;
use crate::film::Film;
use crate::math::RGBColor;
use crate::tonemap::Tonemapper;

pub fn pack_rgb([r, g, b]: [u8; 3]) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

pub fn to_framebuffer<T: Tonemapper>(film: &Film<RGBColor>, tonemapper: &T) -> Vec<u32> {
    film.buffer
        .iter()
        .map(|&color| pack_rgb(tonemapper.map(color)))
        .collect()
}

/// Displays the film until the window is closed or Escape is pressed.
pub fn show<T: Tonemapper>(film: &Film<RGBColor>, tonemapper: &T, title: &str) -> Result<()> {
    let framebuffer = to_framebuffer(film, tonemapper);
    let mut window = Window::new(title, film.width, film.height, WindowOptions::default())?;
    window.limit_update_rate(Some(std::time::Duration::from_micros(16600)));

    log::info!("showing {}x{} image, close the window or press escape to exit", film.width, film.height);
    while window.is_open() && !window.is_key_down(Key::Escape) {
        window.update_with_buffer(&framebuffer, film.width, film.height)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tonemap::Clamp;

    #[test]
    fn test_pack_rgb() {
        assert_eq!(pack_rgb([0xff, 0x80, 0x01]), 0x00ff8001);
    }

    #[test]
    fn test_framebuffer_matches_film_layout() {
        let mut film = Film::new(2, 2, RGBColor::ZERO);
        film.write_at(1, 0, RGBColor::new(1.0, 0.0, 0.0));
        film.write_at(0, 1, RGBColor::new(0.0, 0.0, 1.0));
        let framebuffer = to_framebuffer(&film, &Clamp::default());
        assert_eq!(framebuffer, vec![0, 0x00ff0000, 0x000000ff, 0]);
    }
}
