use std::process::ExitCode;

use structopt::StructOpt;

use whitted_rt::camera::Camera;
use whitted_rt::config::Opt;
use whitted_rt::film::Film;
use whitted_rt::math::RGBColor;
use whitted_rt::parsing::{load_scene, LoadedScene};
use whitted_rt::renderer::render;
use whitted_rt::scene::cornell_box;
use whitted_rt::tonemap::{Clamp, Tonemapper};
use whitted_rt::{window, Result};

pub fn output_film(opt: &Opt, film: &Film<RGBColor>, tonemapper: &Clamp) -> Result<()> {
    tonemapper.write_to_files(film, &opt.exr_filename(), &opt.png_filename())
}

fn run(opt: Opt) -> Result<()> {
    let settings = opt.render_settings()?;

    let LoadedScene { scene, mut camera } = match &opt.scene {
        Some(path) => {
            log::info!("loading scene from {}", path.display());
            load_scene(path)?
        }
        None => {
            log::info!("no scene given, using the built-in cornell box");
            LoadedScene {
                scene: cornell_box(),
                camera: Camera::default(),
            }
        }
    };
    if let Some(pixel_size) = opt.pixel_size {
        camera = camera.with_pixel_size(pixel_size)?;
    }

    let film = render(&scene, &camera, &settings)?;
    let tonemapper = Clamp::new(opt.exposure);
    output_film(&opt, &film, &tonemapper)?;

    if !opt.no_window {
        window::show(&film, &tonemapper, "whitted_rt")?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Opt::from_args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
