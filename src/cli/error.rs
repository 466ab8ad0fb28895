//! Errors surfaced by the command-line front end.

use std::path::PathBuf;

use thiserror::Error;

use crate::ascii::RampError;
use crate::config::ConfigError;
use crate::render::RenderError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid character ramp: {0}")]
    Ramp(#[from] RampError),
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Config file already exists: {}\nUse 'asciify config show' to view current settings.", path.display())]
    ConfigExists { path: PathBuf },
}
