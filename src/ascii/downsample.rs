//! Box-average downsampling of a grayscale image to a character grid.

use image::GrayImage;

/// Downsample a grayscale image to a character grid.
///
/// Maps image pixels to character grid cells by averaging the brightness
/// of all pixels within each cell. When the grid is larger than the image
/// along an axis, each cell takes the single pixel it falls on.
///
/// # Arguments
/// * `gray` - Grayscale source image
/// * `char_width` - Desired output width in characters
/// * `char_height` - Desired output height in characters
///
/// # Returns
/// A `char_width` x `char_height` grayscale image, one pixel per cell.
/// Empty if either side of the source or of the grid is zero.
pub fn downsample(gray: &GrayImage, char_width: u32, char_height: u32) -> GrayImage {
    let (img_width, img_height) = gray.dimensions();
    if char_width == 0 || char_height == 0 || img_width == 0 || img_height == 0 {
        return GrayImage::new(0, 0);
    }

    // Size of each cell in pixels, as floats for accurate mapping
    let cell_w = img_width as f64 / char_width as f64;
    let cell_h = img_height as f64 / char_height as f64;

    let data = gray.as_raw();
    let stride = img_width as usize;
    let mut result = Vec::with_capacity((char_width as usize) * (char_height as usize));

    for cy in 0..char_height {
        let (start_y, end_y) = cell_span(cy, cell_h, img_height);
        for cx in 0..char_width {
            let (start_x, end_x) = cell_span(cx, cell_w, img_width);

            let mut sum = 0u64;
            let mut count = 0u64;
            for py in start_y..end_y {
                let row = &data[py as usize * stride..(py as usize + 1) * stride];
                for &v in &row[start_x as usize..end_x as usize] {
                    sum += v as u64;
                    count += 1;
                }
            }

            // count >= 1 by construction of cell_span
            result.push((sum / count.max(1)) as u8);
        }
    }

    GrayImage::from_raw(char_width, char_height, result)
        .unwrap_or_else(|| GrayImage::new(char_width, char_height))
}

/// Pixel range `[start, end)` covered by cell `i`, never empty.
fn cell_span(i: u32, cell: f64, limit: u32) -> (u32, u32) {
    let start = ((i as f64 * cell) as u32).min(limit - 1);
    let end = (((i + 1) as f64 * cell) as u32).clamp(start + 1, limit);
    (start, end)
}
