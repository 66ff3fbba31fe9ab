pub mod camera;
pub mod config;
pub mod error;
pub mod film;
pub mod geometry;
pub mod material;
pub mod math;
pub mod parsing;
pub mod renderer;
pub mod scene;
pub mod tonemap;
pub mod window;

pub use error::{Error, Result};
