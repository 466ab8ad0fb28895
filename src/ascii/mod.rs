//! Building blocks for turning pixel brightness into text.
//!
//! The render pipeline uses these in order:
//!
//! 1. **Grid sizing** - columns are fixed, rows follow the aspect ratio and scale
//! 2. **Grayscale conversion** - RGB to luminance using BT.601
//! 3. **Downsampling** - box average, used by [`crate::render::Resample::Box`]
//! 4. **Character mapping** - quantize brightness into ramp levels
//!
//! # Character Ramps
//!
//! Built-in presets are available via [`CharSet`]:
//! - `Standard` - `" .,:;ox%#@"`, the default
//! - `Classic` - `" .:-=+*#%@"`
//! - `Blocks` - Unicode block characters
//! - `Minimal` - 4-level clean look

mod charset;
mod dimensions;
mod downsample;
mod grayscale;
mod mapping;

pub use charset::{
    CharSet, Ramp, RampError, BLOCKS_RAMP, CLASSIC_RAMP, MAX_RAMP_LEN, MINIMAL_RAMP,
    STANDARD_RAMP,
};
pub use dimensions::{
    checked_grid_dimensions, grid_dimensions, GridError, DEFAULT_COLUMNS, DEFAULT_SCALE, MAX_CELLS,
};
pub use downsample::downsample;
pub use grayscale::{image_to_grayscale, to_grayscale};
pub use mapping::{char_index, map_to_chars, map_to_rows, pixel_range};
