use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed scene file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode png: {0}")]
    Image(#[from] image::ImageError),

    #[error("failed to encode exr: {0}")]
    Exr(#[from] exr::error::Error),

    #[error("window error: {0}")]
    Window(#[from] minifb::Error),

    #[error("material {0:?} is neither defined in the scene nor a preset")]
    UnknownMaterial(String),

    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f32),

    #[error("invalid camera: {0}")]
    InvalidCamera(String),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
