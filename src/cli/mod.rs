//! Command-line interface definitions and helpers.
//!
//! This module contains CLI argument parsing, settings resolution, and subcommand handlers.

mod args;
mod commands;
mod enums;
mod error;
mod settings;

pub use args::{Args, Command, ConfigAction, DEFAULT_IMAGE};
pub use commands::{convert, handle_config_action, init_config};
pub use enums::{CharacterSet, Filter};
pub use error::CliError;
pub use settings::{Output, Settings};
