//! Merge command-line flags with the config file.
//!
//! Precedence is flag, then config file, then built-in default.

use std::fmt;
use std::path::PathBuf;

use super::args::Args;
use crate::ascii::{CharSet, Ramp, RampError, DEFAULT_COLUMNS, DEFAULT_SCALE};
use crate::config::{Config, DEFAULT_OUTPUT};
use crate::render::{RenderOptions, Resample};

/// Where the rendered text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    File(PathBuf),
    Stdout,
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::File(path) => write!(f, "{}", path.display()),
            Output::Stdout => write!(f, "stdout"),
        }
    }
}

/// Everything needed for one conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub image: PathBuf,
    pub output: Output,
    pub options: RenderOptions,
}

impl Settings {
    /// Resolve the effective settings.
    ///
    /// Unknown preset or filter names in the config file are logged and
    /// replaced by the default. A custom ramp that is empty or too long is
    /// an error wherever it comes from.
    pub fn resolve(args: &Args, config: &Config) -> Result<Self, RampError> {
        let render = &config.render;

        let ramp = if let Some(custom) = &args.ramp {
            Ramp::new(custom)?
        } else if let Some(preset) = args.charset {
            CharSet::from(preset).ramp()
        } else if let Some(custom) = &render.ramp {
            Ramp::new(custom)?
        } else if let Some(name) = &render.charset {
            match CharSet::from_name(name) {
                Some(preset) => preset.ramp(),
                None => {
                    log::warn!("Unknown charset '{}' in config, using standard", name);
                    Ramp::default()
                }
            }
        } else {
            Ramp::default()
        };
        let ramp = if args.invert || render.invert {
            ramp.reversed()
        } else {
            ramp
        };

        let resample = match (args.filter, &render.filter) {
            (Some(filter), _) => Resample::from(filter),
            (None, Some(name)) => Resample::from_name(name).unwrap_or_else(|| {
                log::warn!(
                    "Unknown filter '{}' in config, using {}",
                    name,
                    Resample::default().name()
                );
                Resample::default()
            }),
            (None, None) => Resample::default(),
        };

        let options = RenderOptions {
            columns: args.columns.or(render.columns).unwrap_or(DEFAULT_COLUMNS),
            scale: args.scale.or(render.scale).unwrap_or(DEFAULT_SCALE),
            ramp,
            resample,
        };

        let output = if args.stdout {
            Output::Stdout
        } else {
            Output::File(
                args.output
                    .clone()
                    .or_else(|| config.output.path.clone())
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            )
        };

        Ok(Settings {
            image: args.image.clone(),
            output,
            options,
        })
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Image: {}", self.image.display())?;
        writeln!(f, "  Output: {}", self.output)?;
        writeln!(f, "  Columns: {}", self.options.columns)?;
        writeln!(f, "  Scale: {}", self.options.scale)?;
        writeln!(f, "  Ramp: \"{}\"", self.options.ramp)?;
        write!(f, "  Filter: {}", self.options.resample.name())
    }
}
