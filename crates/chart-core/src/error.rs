// File: crates/chart-core/src/error.rs
// Summary: Error type shared by config validation and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("invalid chart config: {0}")]
    InvalidConfig(String),

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to read pixels back from the raster surface")]
    ReadPixels,

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
