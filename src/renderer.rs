use std::time::Instant;

use pbr::ProgressBar;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::config::RenderSettings;
use crate::error::Result;
use crate::film::Film;
use crate::math::RGBColor;
use crate::scene::Scene;

/// Traces one view ray per pixel. Rows are rendered one after another, the pixels of a row
/// in parallel on a pool of `settings.threads` workers.
pub fn render(scene: &Scene, camera: &Camera, settings: &RenderSettings) -> Result<Film<RGBColor>> {
    let settings = settings.clone().validate()?;
    let camera = camera.with_resolution(settings.width, settings.height);
    let mut film = Film::new(settings.width, settings.height, RGBColor::ZERO);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(settings.threads)
        .build()?;

    log::info!(
        "rendering {}x{} with depth {} on {} threads ({} objects, {} lights)",
        film.width,
        film.height,
        settings.max_depth,
        settings.threads,
        scene.objects().len(),
        scene.lights().len()
    );
    let mut pb = if settings.progress {
        Some(ProgressBar::new(film.height as u64))
    } else {
        None
    };
    let now = Instant::now();

    let width = film.width;
    let max_depth = settings.max_depth;
    for (y, row) in film.buffer.chunks_mut(width).enumerate() {
        pool.install(|| {
            row.par_iter_mut().enumerate().for_each(|(x, pixel)| {
                let ray = camera.get_ray(x, y);
                *pixel = scene.trace(ray, max_depth);
            });
        });
        if let Some(pb) = pb.as_mut() {
            pb.inc();
        }
    }

    if let Some(pb) = pb.as_mut() {
        pb.finish_print("done");
    }
    log::info!("render took {:.3}s", now.elapsed().as_secs_f32());
    Ok(film)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::Error;
    use crate::scene::cornell_box;

    #[test]
    fn test_film_matches_per_pixel_trace() {
        let scene = cornell_box();
        let camera = Camera::default();
        let settings = RenderSettings {
            width: 24,
            height: 16,
            threads: 2,
            ..RenderSettings::default()
        };
        let film = render(&scene, &camera, &settings).unwrap();
        assert_eq!(film.width, 24);
        assert_eq!(film.height, 16);

        let camera = camera.with_resolution(24, 16);
        for y in 0..16 {
            for x in 0..24 {
                assert_eq!(film.at(x, y), scene.trace(camera.get_ray(x, y), 5));
            }
        }
    }

    #[test]
    fn test_empty_scene_renders_black() {
        let scene = Scene::new();
        let settings = RenderSettings {
            width: 8,
            height: 8,
            threads: 1,
            ..RenderSettings::default()
        };
        let film = render(&scene, &Camera::default(), &settings).unwrap();
        assert!(film.buffer.iter().all(|&c| c == RGBColor::BLACK));
    }

    #[test]
    fn test_invalid_settings_are_an_error() {
        let scene = Scene::new();
        for settings in [
            RenderSettings {
                width: 0,
                ..RenderSettings::default()
            },
            RenderSettings {
                height: 0,
                ..RenderSettings::default()
            },
            RenderSettings {
                threads: 0,
                ..RenderSettings::default()
            },
        ] {
            assert!(matches!(
                render(&scene, &Camera::default(), &settings),
                Err(Error::InvalidSettings(_))
            ));
        }
    }
}
