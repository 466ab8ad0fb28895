//! Brightness to character mapping.

use image::GrayImage;

use super::charset::Ramp;

/// Width of one brightness band: `floor(255 / levels)`.
///
/// Zero for more than 255 levels, which [`Ramp`] never allows.
#[inline]
pub fn pixel_range(levels: usize) -> usize {
    if levels == 0 {
        return 0;
    }
    255 / levels
}

/// Ramp index for a brightness value.
///
/// `index = min(floor(brightness / pixel_range), levels - 1)`
///
/// The band width is `floor(255 / levels)`, so the last level absorbs the
/// remainder and 255 always maps to `levels - 1`.
#[inline]
pub fn char_index(brightness: u8, levels: usize) -> usize {
    let range = pixel_range(levels);
    if range == 0 {
        return levels.saturating_sub(1);
    }
    (brightness as usize / range).min(levels - 1)
}

/// Map brightness values to ramp characters.
///
/// # Arguments
/// * `brightness` - Brightness values (0-255)
/// * `ramp` - Character ramp, ordered from darkest to brightest
///
/// # Returns
/// A vector of characters, one per input brightness value.
///
/// # Example
/// ```
/// use asciify::ascii::{map_to_chars, Ramp};
///
/// let chars = map_to_chars(&[0, 127, 255], &Ramp::default());
/// assert_eq!(chars, vec![' ', 'o', '@']);
/// ```
pub fn map_to_chars(brightness: &[u8], ramp: &Ramp) -> Vec<char> {
    let levels = ramp.len();
    brightness
        .iter()
        .map(|&b| ramp.get(char_index(b, levels)))
        .collect()
}

/// Map a grayscale grid to one string per row.
pub fn map_to_rows(gray: &GrayImage, ramp: &Ramp) -> Vec<String> {
    let width = gray.width() as usize;
    if width == 0 {
        return Vec::new();
    }

    gray.as_raw()
        .chunks_exact(width)
        .map(|row| map_to_chars(row, ramp).into_iter().collect())
        .collect()
}
