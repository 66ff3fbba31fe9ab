use std::path::PathBuf;

use structopt::StructOpt;

use crate::error::{Error, Result};

#[derive(Debug, StructOpt)]
#[structopt(name = "whitted_rt", about = "Renders spheres with shadows and mirror reflections")]
pub struct Opt {
    /// JSON scene description. The built-in cornell box is rendered when omitted.
    #[structopt(short, long, parse(from_os_str))]
    pub scene: Option<PathBuf>,

    #[structopt(long, default_value = "400")]
    pub width: usize,

    #[structopt(long, default_value = "400")]
    pub height: usize,

    /// Maximum number of surfaces a view ray may visit, reflections included.
    #[structopt(short, long, default_value = "5")]
    pub depth: i32,

    /// Worker threads, defaults to the number of cpus.
    #[structopt(short, long)]
    pub threads: Option<usize>,

    /// Overrides the pixel size of the scene's camera.
    #[structopt(long)]
    pub pixel_size: Option<f32>,

    #[structopt(long, default_value = "1.0")]
    pub exposure: f32,

    /// Output files are written to output/<NAME>.png and output/<NAME>.exr
    #[structopt(short, long, default_value = "output")]
    pub output: String,

    #[structopt(long)]
    pub no_window: bool,

    #[structopt(long)]
    pub no_progress: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub width: usize,
    pub height: usize,
    pub max_depth: i32,
    pub threads: usize,
    pub progress: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            width: 400,
            height: 400,
            max_depth: 5,
            threads: num_cpus::get(),
            progress: false,
        }
    }
}

impl RenderSettings {
    pub fn validate(self) -> Result<Self> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidSettings(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.threads == 0 {
            return Err(Error::InvalidSettings(String::from(
                "thread count must be non-zero",
            )));
        }
        Ok(self)
    }
}

impl Opt {
    pub fn render_settings(&self) -> Result<RenderSettings> {
        RenderSettings {
            width: self.width,
            height: self.height,
            max_depth: self.depth,
            threads: self.threads.unwrap_or_else(num_cpus::get),
            progress: !self.no_progress,
        }
        .validate()
    }

    pub fn exr_filename(&self) -> String {
        format!("output/{}.exr", self.output)
    }

    pub fn png_filename(&self) -> String {
        format!("output/{}.png", self.output)
    }
}
