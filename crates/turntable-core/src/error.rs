use thiserror::Error;

#[derive(Error, Debug)]
pub enum TurntableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("Product has no color options")]
    NoColors,

    #[error("Invalid frame count: {0} (must be at least 1)")]
    InvalidFrameCount(u32),

    #[error("Invalid drag sensitivity: {0} (must be finite and positive)")]
    InvalidDragSensitivity(f32),

    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("Invalid color value: {0:?}")]
    InvalidColor(String),

    #[error("Color index {index} out of range (total: {total})")]
    ColorIndexOutOfRange { index: usize, total: usize },

    #[error("Loader pool error: {0}")]
    Executor(String),
}

pub type Result<T> = std::result::Result<T, TurntableError>;
