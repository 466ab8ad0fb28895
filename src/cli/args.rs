//! CLI argument parsing with clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{CharacterSet, Filter};

/// Image file read when none is given.
pub const DEFAULT_IMAGE: &str = "img.png";

/// Convert an image to ASCII art
#[derive(Parser, Debug)]
#[command(name = "asciify")]
#[command(version, about = "Convert an image to ASCII art", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image to convert
    #[arg(default_value = DEFAULT_IMAGE)]
    pub image: PathBuf,

    /// Output text file (default: ascii_art.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Output width in characters (default: 80)
    #[arg(long)]
    pub columns: Option<u32>,

    /// Vertical scale for non-square character cells (default: 0.5)
    #[arg(long)]
    pub scale: Option<f64>,

    /// Custom character ramp, darkest to lightest
    #[arg(long)]
    pub ramp: Option<String>,

    /// Built-in character ramp
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Reverse the ramp (for light terminals)
    #[arg(long)]
    pub invert: bool,

    /// Resampling filter
    #[arg(long)]
    pub filter: Option<Filter>,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["asciify"]);
        assert_eq!(args.image, PathBuf::from("img.png"));
        assert!(args.output.is_none());
        assert!(!args.stdout);
        assert!(args.columns.is_none());
        assert!(args.scale.is_none());
        assert!(args.ramp.is_none());
        assert!(args.charset.is_none());
        assert!(!args.invert);
        assert!(args.filter.is_none());
        assert!(args.config.is_none());
        assert_eq!(args.verbose, 0);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_args_image_and_output() {
        let args = Args::parse_from(["asciify", "photo.jpg", "-o", "out.txt"]);
        assert_eq!(args.image, PathBuf::from("photo.jpg"));
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_args_numeric_options() {
        let args = Args::parse_from(["asciify", "--columns", "120", "--scale", "0.43"]);
        assert_eq!(args.columns, Some(120));
        assert_eq!(args.scale, Some(0.43));
    }

    #[test]
    fn test_args_negative_columns_rejected() {
        assert!(Args::try_parse_from(["asciify", "--columns", "-5"]).is_err());
    }

    #[test]
    fn test_args_ramp_and_invert() {
        let args = Args::parse_from(["asciify", "--ramp", "@%#*+=-:. ", "--invert"]);
        assert_eq!(args.ramp.as_deref(), Some("@%#*+=-:. "));
        assert!(args.invert);
    }

    #[test]
    fn test_args_charset_values() {
        let args = Args::parse_from(["asciify", "--charset", "standard"]);
        assert_eq!(args.charset, Some(CharacterSet::Standard));

        let args = Args::parse_from(["asciify", "--charset", "classic"]);
        assert_eq!(args.charset, Some(CharacterSet::Classic));

        let args = Args::parse_from(["asciify", "--charset", "blocks"]);
        assert_eq!(args.charset, Some(CharacterSet::Blocks));

        let args = Args::parse_from(["asciify", "--charset", "minimal"]);
        assert_eq!(args.charset, Some(CharacterSet::Minimal));

        assert!(Args::try_parse_from(["asciify", "--charset", "braille"]).is_err());
    }

    #[test]
    fn test_args_filter_values() {
        let args = Args::parse_from(["asciify", "--filter", "catmull-rom"]);
        assert_eq!(args.filter, Some(Filter::CatmullRom));

        let args = Args::parse_from(["asciify", "--filter", "lanczos3"]);
        assert_eq!(args.filter, Some(Filter::Lanczos3));

        let args = Args::parse_from(["asciify", "--filter", "box"]);
        assert_eq!(args.filter, Some(Filter::Box));
    }

    #[test]
    fn test_args_stdout_conflicts_with_output() {
        assert!(Args::try_parse_from(["asciify", "--stdout", "-o", "x.txt"]).is_err());
        let args = Args::parse_from(["asciify", "--stdout"]);
        assert!(args.stdout);
    }

    #[test]
    fn test_args_verbose_count() {
        let args = Args::parse_from(["asciify", "-vv"]);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_args_config_option() {
        let args = Args::parse_from(["asciify", "--config", "/tmp/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/config.toml")));

        let args = Args::parse_from(["asciify", "-c", "/tmp/test.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/test.toml")));
    }

    #[test]
    fn test_args_config_show_subcommand() {
        let args = Args::parse_from(["asciify", "config", "show"]);
        match args.command {
            Some(Command::Config {
                action: ConfigAction::Show,
            }) => (),
            _ => panic!("Expected Config Show subcommand"),
        }
    }

    #[test]
    fn test_args_config_init_subcommand() {
        let args = Args::parse_from(["asciify", "config", "init"]);
        match args.command {
            Some(Command::Config {
                action: ConfigAction::Init,
            }) => (),
            _ => panic!("Expected Config Init subcommand"),
        }
    }
}
