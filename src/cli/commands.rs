//! Conversion and config subcommand handlers.

use std::path::Path;

use super::args::ConfigAction;
use super::error::CliError;
use super::settings::{Output, Settings};
use crate::config::DEFAULT_CONFIG_TOML;
use crate::render::render;

/// Render the configured image and write it out.
///
/// Nothing is written when rendering fails.
pub fn convert(settings: &Settings) -> Result<(), CliError> {
    let art = render(&settings.image, &settings.options)?;

    match &settings.output {
        Output::Stdout => println!("{}", art),
        Output::File(path) => {
            std::fs::write(path, art.to_string()).map_err(|e| CliError::Write {
                path: path.clone(),
                source: e,
            })?;
            log::info!(
                "Wrote {}x{} characters to {}",
                art.width(),
                art.height(),
                path.display()
            );
        }
    }

    Ok(())
}

/// Handle config subcommand actions.
pub fn handle_config_action(
    action: ConfigAction,
    settings: &Settings,
    config_path: &Path,
) -> Result<(), CliError> {
    match action {
        ConfigAction::Show => {
            println!("Current configuration:");
            println!("{}", settings);
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            init_config(config_path)?;
            println!("Created config file: {}", config_path.display());
            Ok(())
        }
    }
}

/// Write the commented default config, refusing to overwrite an existing file.
pub fn init_config(config_path: &Path) -> Result<(), CliError> {
    if config_path.exists() {
        return Err(CliError::ConfigExists {
            path: config_path.to_path_buf(),
        });
    }

    let write_err = |e: std::io::Error| CliError::Write {
        path: config_path.to_path_buf(),
        source: e,
    };

    // Create parent directories if needed
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(config_path, DEFAULT_CONFIG_TOML).map_err(write_err)
}
