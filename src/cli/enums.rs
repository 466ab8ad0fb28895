//! CLI enum types for ramp presets and resampling filters.

use clap::ValueEnum;

use crate::ascii;
use crate::render::Resample;

/// Built-in character ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    #[default]
    Standard,
    Classic,
    Blocks,
    Minimal,
}

impl From<CharacterSet> for ascii::CharSet {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Standard => ascii::CharSet::Standard,
            CharacterSet::Classic => ascii::CharSet::Classic,
            CharacterSet::Blocks => ascii::CharSet::Blocks,
            CharacterSet::Minimal => ascii::CharSet::Minimal,
        }
    }
}

/// Resampling filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Filter {
    Nearest,
    Triangle,
    #[default]
    CatmullRom,
    Gaussian,
    Lanczos3,
    Box,
}

impl From<Filter> for Resample {
    fn from(f: Filter) -> Self {
        match f {
            Filter::Nearest => Resample::Nearest,
            Filter::Triangle => Resample::Triangle,
            Filter::CatmullRom => Resample::CatmullRom,
            Filter::Gaussian => Resample::Gaussian,
            Filter::Lanczos3 => Resample::Lanczos3,
            Filter::Box => Resample::Box,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_to_ascii_charset() {
        assert_eq!(
            ascii::CharSet::from(CharacterSet::Standard),
            ascii::CharSet::Standard
        );
        assert_eq!(
            ascii::CharSet::from(CharacterSet::Blocks),
            ascii::CharSet::Blocks
        );
        assert_eq!(
            ascii::CharSet::from(CharacterSet::Minimal),
            ascii::CharSet::Minimal
        );
    }

    #[test]
    fn test_filter_names_match_config_names() {
        // The same spelling must work on the command line and in config.toml
        for filter in Filter::value_variants() {
            let value = filter.to_possible_value().unwrap();
            assert_eq!(
                Resample::from_name(value.get_name()),
                Some(Resample::from(*filter))
            );
        }
    }
}
