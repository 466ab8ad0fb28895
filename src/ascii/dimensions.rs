//! Character grid size calculation.

use thiserror::Error;

/// Default number of output columns.
pub const DEFAULT_COLUMNS: u32 = 80;

/// Default vertical scale.
/// Terminal characters are typically ~2x taller than wide, so half as many
/// rows as a square-cell mapping keeps the picture's proportions.
pub const DEFAULT_SCALE: f64 = 0.5;

/// Largest character grid that will be rendered, in cells (4096 x 4096).
///
/// Resizing allocates a buffer per output cell, so anything bigger is
/// refused before it reaches the allocator.
pub const MAX_CELLS: u64 = 1 << 24;

/// A grid that cannot be rendered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("scale must be a finite number, got {0}")]
    NonFiniteScale(f64),
    #[error("cannot resize {img_width}x{img_height} image to {columns}x{rows} characters")]
    Empty {
        img_width: u32,
        img_height: u32,
        columns: u32,
        rows: u32,
    },
    #[error("a {columns}x{rows} character grid exceeds the limit of {limit} cells")]
    TooLarge { columns: u32, rows: f64, limit: u64 },
}

/// Calculate the character grid for an image.
///
/// The width is always `columns`. The height follows the image aspect ratio,
/// compressed by `scale`:
///
/// `rows = trunc(scale * (img_height / img_width) * columns)`
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `columns` - Output width in characters
/// * `scale` - Vertical compression factor
///
/// # Returns
/// A tuple of (columns, rows). Either side may be zero for degenerate input
/// (zero-sized image, `columns == 0`, `scale <= 0` or a very flat image).
///
/// # Example
/// ```
/// use asciify::ascii::grid_dimensions;
///
/// // A 640x480 image at 80 columns and the default scale
/// assert_eq!(grid_dimensions(640, 480, 80, 0.5), (80, 30));
/// ```
pub fn grid_dimensions(img_width: u32, img_height: u32, columns: u32, scale: f64) -> (u32, u32) {
    // NaN and negatives saturate to 0 in `as` casts.
    (columns, row_count(img_width, img_height, columns, scale) as u32)
}

/// Like [`grid_dimensions`], but refuses grids that cannot be rendered.
///
/// Fails on a non-finite `scale`, on a grid with zero rows or columns, and
/// on a grid of more than [`MAX_CELLS`] cells.
pub fn checked_grid_dimensions(
    img_width: u32,
    img_height: u32,
    columns: u32,
    scale: f64,
) -> Result<(u32, u32), GridError> {
    if !scale.is_finite() {
        return Err(GridError::NonFiniteScale(scale));
    }

    // Checked before the cast so rows past u32::MAX are not clamped into range.
    let rows = row_count(img_width, img_height, columns, scale);
    if rows * columns as f64 > MAX_CELLS as f64 {
        return Err(GridError::TooLarge {
            columns,
            rows,
            limit: MAX_CELLS,
        });
    }

    let (columns, rows) = grid_dimensions(img_width, img_height, columns, scale);
    if columns == 0 || rows == 0 {
        return Err(GridError::Empty {
            img_width,
            img_height,
            columns,
            rows,
        });
    }
    Ok((columns, rows))
}

/// Truncated row count before any clamping.
fn row_count(img_width: u32, img_height: u32, columns: u32, scale: f64) -> f64 {
    if img_width == 0 || img_height == 0 || columns == 0 {
        return 0.0;
    }
    let aspect_ratio = img_height as f64 / img_width as f64;
    (scale * aspect_ratio * columns as f64).trunc()
}
