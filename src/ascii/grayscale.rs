//! RGB to grayscale conversion using ITU-R BT.601 luminance formula.

use image::{DynamicImage, GrayImage, RgbImage};

/// Convert an RGB image to grayscale using ITU-R BT.601 luminance formula.
///
/// The luminance formula is: Y = 0.299*R + 0.587*G + 0.114*B
///
/// This function uses integer math, avoiding floating-point
/// operations per pixel. The coefficients are scaled by 1000 and the result
/// is rounded to the nearest level:
/// - R: 299/1000
/// - G: 587/1000
/// - B: 114/1000
///
/// # Arguments
/// * `rgb` - An 8-bit RGB image
///
/// # Returns
/// A grayscale image of the same dimensions
pub fn to_grayscale(rgb: &RgbImage) -> GrayImage {
    let (width, height) = rgb.dimensions();
    let mut gray = Vec::with_capacity((width as usize) * (height as usize));

    // Coefficients scaled by 1000: 299 + 587 + 114 = 1000
    for px in rgb.as_raw().chunks_exact(3) {
        gray.push(luma(px[0], px[1], px[2]));
    }

    // Buffer length is exactly width * height.
    GrayImage::from_raw(width, height, gray).unwrap_or_else(|| GrayImage::new(width, height))
}

/// Convert any decoded image to grayscale.
///
/// Alpha is dropped and wider sample types are narrowed to 8 bits before
/// the luminance formula is applied.
pub fn image_to_grayscale(img: &DynamicImage) -> GrayImage {
    match img {
        // Already single-channel, keep the samples as they are.
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        other => to_grayscale(&other.to_rgb8()),
    }
}

#[inline]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (r as u32, g as u32, b as u32);
    // +500 rounds half up; the maximum is 255_500 / 1000 = 255.
    ((299 * r + 587 * g + 114 * b + 500) / 1000) as u8
}
