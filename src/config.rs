//! Configuration file handling for asciify.
//!
//! Loads configuration from `~/.config/asciify/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default output file when none is configured.
pub const DEFAULT_OUTPUT: &str = "ascii_art.txt";

/// Configuration file structure for asciify.
/// Loaded from ~/.config/asciify/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    #[serde(default)]
    pub columns: Option<u32>,
    #[serde(default)]
    pub scale: Option<f64>,
    /// Custom ramp, takes precedence over `charset`
    #[serde(default)]
    pub ramp: Option<String>,
    /// Preset name: standard, classic, blocks, minimal
    #[serde(default)]
    pub charset: Option<String>,
    #[serde(default)]
    pub invert: bool,
    /// Resampling filter name
    #[serde(default)]
    pub filter: Option<String>,
}

#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("asciify").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/asciify/config.toml")
        })
}

/// Commented config file written by `asciify config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# asciify configuration

[render]
# Output width in characters
columns = 80
# Vertical compression for non-square character cells
scale = 0.5
# Preset: standard, classic, blocks, minimal
charset = "standard"
# Custom ramp, darkest to lightest (overrides charset)
# ramp = " .,:;ox%#@"
# Reverse the ramp (for light terminals)
invert = false
# Resampling filter: nearest, triangle, catmull-rom, gaussian, lanczos3, box
filter = "catmull-rom"

[output]
# Where the rendered text is written
path = "ascii_art.txt"
"#;
