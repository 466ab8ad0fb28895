//! Character ramps used for brightness mapping.

use std::fmt;

use thiserror::Error;

/// Default ramp (10 levels).
/// Characters ordered from darkest (space) to brightest (@).
pub const STANDARD_RAMP: &str = " .,:;ox%#@";

/// Classic density ramp (10 levels), a little heavier in the midtones.
pub const CLASSIC_RAMP: &str = " .:-=+*#%@";

/// Block character ramp (5 levels).
/// Uses Unicode block characters for higher perceived resolution.
pub const BLOCKS_RAMP: &str = " ░▒▓█";

/// Minimal ramp (4 levels).
/// Clean, less noisy look.
pub const MINIMAL_RAMP: &str = " .:#";

/// Longest ramp that still leaves every level at least one brightness step wide.
pub const MAX_RAMP_LEN: usize = 255;

/// Errors raised when building a [`Ramp`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RampError {
    #[error("character ramp must contain at least one character")]
    Empty,
    #[error("character ramp has {0} characters, at most 255 are supported")]
    TooLong(usize),
}

/// An ordered, immutable character alphabet from darkest to lightest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ramp {
    chars: Vec<char>,
}

impl Ramp {
    /// Build a ramp from a string, one level per character.
    pub fn new(chars: &str) -> Result<Self, RampError> {
        let chars: Vec<char> = chars.chars().collect();
        if chars.is_empty() {
            return Err(RampError::Empty);
        }
        if chars.len() > MAX_RAMP_LEN {
            return Err(RampError::TooLong(chars.len()));
        }
        Ok(Self { chars })
    }

    /// Number of brightness levels.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; an empty ramp cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Character at `index`, clamped to the brightest level.
    pub fn get(&self, index: usize) -> char {
        self.chars[index.min(self.chars.len() - 1)]
    }

    /// Same levels in the opposite order, for light-background output.
    pub fn reversed(&self) -> Self {
        Self {
            chars: self.chars.iter().rev().copied().collect(),
        }
    }
}

impl Default for Ramp {
    fn default() -> Self {
        CharSet::Standard.ramp()
    }
}

impl fmt::Display for Ramp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Built-in ramp presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// `" .,:;ox%#@"`
    #[default]
    Standard,
    /// `" .:-=+*#%@"`
    Classic,
    /// Unicode blocks
    Blocks,
    /// Four levels for a clean look
    Minimal,
}

impl CharSet {
    /// The raw characters of this preset.
    pub fn as_str(&self) -> &'static str {
        match self {
            CharSet::Standard => STANDARD_RAMP,
            CharSet::Classic => CLASSIC_RAMP,
            CharSet::Blocks => BLOCKS_RAMP,
            CharSet::Minimal => MINIMAL_RAMP,
        }
    }

    /// Build the [`Ramp`] for this preset.
    pub fn ramp(&self) -> Ramp {
        // Presets are non-empty and short.
        Ramp {
            chars: self.as_str().chars().collect(),
        }
    }

    /// Get a human-readable name for the preset.
    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Standard => "standard",
            CharSet::Classic => "classic",
            CharSet::Blocks => "blocks",
            CharSet::Minimal => "minimal",
        }
    }

    /// Look up a preset by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "standard" => Some(CharSet::Standard),
            "classic" => Some(CharSet::Classic),
            "blocks" => Some(CharSet::Blocks),
            "minimal" => Some(CharSet::Minimal),
            _ => None,
        }
    }
}
