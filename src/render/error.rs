//! Render error types

use std::path::PathBuf;

use thiserror::Error;

use crate::ascii::RampError;

/// Error type for render operations
#[derive(Debug, Error)]
pub enum RenderError {
    /// Input path does not resolve to a file
    #[error("The file was not found: {}. Check the file path.", path.display())]
    FileNotFound { path: PathBuf },
    /// Decode, resize or conversion failed
    #[error("An error occurred: {0}")]
    Processing(String),
    /// Character ramp cannot be used
    #[error("An error occurred: {0}")]
    InvalidRamp(#[from] RampError),
}

impl RenderError {
    /// Map an image crate error for `path`, separating a missing file from other failures.
    pub fn from_image(path: impl Into<PathBuf>, err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io) if io.kind() == std::io::ErrorKind::NotFound => {
                RenderError::FileNotFound { path: path.into() }
            }
            other => RenderError::Processing(other.to_string()),
        }
    }
}
