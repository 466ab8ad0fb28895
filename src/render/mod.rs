//! Image to ASCII art rendering.
//!
//! [`render`] decodes an image file and runs the full pipeline;
//! [`render_image`] does the same for an image that is already in memory.
//!
//! ```no_run
//! use asciify::render::{render, RenderOptions};
//!
//! match render("img.png", &RenderOptions::default()) {
//!     Ok(art) => println!("{}", art),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

mod error;

use std::fmt;
use std::path::Path;

use image::imageops::FilterType;
use image::DynamicImage;

use crate::ascii::{
    checked_grid_dimensions, downsample, image_to_grayscale, map_to_rows, Ramp, DEFAULT_COLUMNS,
    DEFAULT_SCALE,
};

pub use error::RenderError;

/// Resampling filter used to shrink (or grow) the image to the character grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resample {
    Nearest,
    Triangle,
    /// Bicubic
    #[default]
    CatmullRom,
    Gaussian,
    Lanczos3,
    /// Average of every source pixel under a cell, computed on luminance
    Box,
}

impl Resample {
    /// The `image` crate filter, or `None` for [`Resample::Box`].
    pub fn filter_type(&self) -> Option<FilterType> {
        match self {
            Resample::Nearest => Some(FilterType::Nearest),
            Resample::Triangle => Some(FilterType::Triangle),
            Resample::CatmullRom => Some(FilterType::CatmullRom),
            Resample::Gaussian => Some(FilterType::Gaussian),
            Resample::Lanczos3 => Some(FilterType::Lanczos3),
            Resample::Box => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Resample::Nearest => "nearest",
            Resample::Triangle => "triangle",
            Resample::CatmullRom => "catmull-rom",
            Resample::Gaussian => "gaussian",
            Resample::Lanczos3 => "lanczos3",
            Resample::Box => "box",
        }
    }

    /// Look up a filter by name (case-insensitive). Accepts a few common aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "nearest" => Some(Resample::Nearest),
            "triangle" | "bilinear" => Some(Resample::Triangle),
            "catmull-rom" | "catmullrom" | "bicubic" => Some(Resample::CatmullRom),
            "gaussian" => Some(Resample::Gaussian),
            "lanczos3" | "lanczos" => Some(Resample::Lanczos3),
            "box" | "area" => Some(Resample::Box),
            _ => None,
        }
    }
}

/// Parameters for a single render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Output width in characters
    pub columns: u32,
    /// Vertical compression for non-square character cells
    pub scale: f64,
    /// Character ramp, darkest to lightest
    pub ramp: Ramp,
    pub resample: Resample,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            scale: DEFAULT_SCALE,
            ramp: Ramp::default(),
            resample: Resample::default(),
        }
    }
}

impl RenderOptions {
    pub fn with_columns(mut self, columns: u32) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_ramp(mut self, ramp: Ramp) -> Self {
        self.ramp = ramp;
        self
    }

    pub fn with_resample(mut self, resample: Resample) -> Self {
        self.resample = resample;
        self
    }
}

/// Rendered text, one string per character row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AsciiArt {
    rows: Vec<String>,
}

impl AsciiArt {
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of the rows in characters.
    pub fn width(&self) -> usize {
        self.rows.first().map(|r| r.chars().count()).unwrap_or(0)
    }

    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }
}

/// Rows joined by `\n`, without a trailing newline.
impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

/// Decode the image at `path` and render it as ASCII art.
///
/// # Errors
/// * [`RenderError::FileNotFound`] if `path` does not exist
/// * [`RenderError::Processing`] if the file cannot be decoded or the
///   character grid would be empty
pub fn render(path: impl AsRef<Path>, options: &RenderOptions) -> Result<AsciiArt, RenderError> {
    let path = path.as_ref();
    log::debug!("Decoding {}", path.display());

    // The file handle lives only inside `open`.
    let img = image::open(path).map_err(|e| RenderError::from_image(path, e))?;
    render_image(&img, options)
}

/// Render an already decoded image.
pub fn render_image(img: &DynamicImage, options: &RenderOptions) -> Result<AsciiArt, RenderError> {
    let (img_width, img_height) = (img.width(), img.height());
    let (columns, rows) =
        checked_grid_dimensions(img_width, img_height, options.columns, options.scale)
            .map_err(|e| RenderError::Processing(e.to_string()))?;

    log::debug!(
        "Resizing {}x{} -> {}x{} with {} filter",
        img_width,
        img_height,
        columns,
        rows,
        options.resample.name()
    );

    let gray = match options.resample.filter_type() {
        Some(filter) => image_to_grayscale(&img.resize_exact(columns, rows, filter)),
        None => downsample(&image_to_grayscale(img), columns, rows),
    };

    Ok(AsciiArt {
        rows: map_to_rows(&gray, &options.ramp),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    fn solid(width: u32, height: u32, value: u8) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([value])))
    }

    #[test]
    fn test_defaults() {
        let opts = RenderOptions::default();
        assert_eq!(opts.columns, 80);
        assert_eq!(opts.scale, 0.5);
        assert_eq!(opts.ramp.to_string(), " .,:;ox%#@");
        assert_eq!(opts.resample, Resample::CatmullRom);
    }

    #[test]
    fn test_white_square_renders_brightest_char() {
        let opts = RenderOptions::default().with_columns(10);
        let art = render_image(&solid(10, 10, 255), &opts).unwrap();
        assert_eq!(art.height(), 5);
        assert_eq!(art.width(), 10);
        assert!(art.rows().iter().all(|r| r == "@@@@@@@@@@"));
    }

    #[test]
    fn test_one_pixel_image() {
        // 1x1 at scale 1.0 keeps a single cell
        let opts = RenderOptions::default().with_columns(1).with_scale(1.0);
        let art = render_image(&solid(1, 1, 100), &opts).unwrap();
        // 100 / 25 = 4
        assert_eq!(art.to_string(), ";");
    }

    #[test]
    fn test_zero_rows_is_processing_error() {
        let opts = RenderOptions::default().with_columns(1);
        // 0.5 * 1 * 1 = 0.5 -> 0 rows
        let err = render_image(&solid(1, 1, 0), &opts).unwrap_err();
        assert!(matches!(err, RenderError::Processing(_)));
    }

    #[test]
    fn test_zero_columns_is_processing_error() {
        let opts = RenderOptions::default().with_columns(0);
        let err = render_image(&solid(4, 4, 0), &opts).unwrap_err();
        assert!(matches!(err, RenderError::Processing(_)));
    }

    #[test]
    fn test_color_image_is_converted() {
        let rgb = RgbImage::from_pixel(4, 4, Rgb([0, 255, 0]));
        let opts = RenderOptions::default()
            .with_columns(4)
            .with_resample(Resample::Nearest);
        let art = render_image(&DynamicImage::ImageRgb8(rgb), &opts).unwrap();
        // luma 150 -> 150 / 25 = 6 -> 'x'
        assert_eq!(art.to_string(), "xxxx\nxxxx");
    }

    fn assert_grid_refused(opts: RenderOptions) {
        for resample in [Resample::CatmullRom, Resample::Box] {
            let opts = opts.clone().with_resample(resample);
            match render_image(&solid(10, 10, 255), &opts) {
                Err(RenderError::Processing(_)) => {}
                other => panic!("Expected Processing for {:?}, got {:?}", resample, other),
            }
        }
    }

    #[test]
    fn test_infinite_scale_is_processing_error() {
        assert_grid_refused(RenderOptions::default().with_columns(10).with_scale(f64::INFINITY));
    }

    #[test]
    fn test_huge_scale_is_processing_error() {
        assert_grid_refused(RenderOptions::default().with_columns(10).with_scale(1e12));
    }

    #[test]
    fn test_huge_columns_is_processing_error() {
        assert_grid_refused(RenderOptions::default().with_columns(u32::MAX));
    }

    #[test]
    fn test_oversized_grid_message() {
        let opts = RenderOptions::default().with_columns(100_000);
        let err = render_image(&solid(10, 10, 255), &opts).unwrap_err();
        assert!(err.to_string().contains("exceeds the limit"));
    }

    #[test]
    fn test_box_resample_matches_grid() {
        let opts = RenderOptions::default()
            .with_columns(6)
            .with_resample(Resample::Box);
        let art = render_image(&solid(30, 20, 255), &opts).unwrap();
        assert_eq!(art.height(), 2);
        assert!(art.rows().iter().all(|r| r == "@@@@@@"));
    }

    #[test]
    fn test_display_has_no_trailing_newline() {
        let art = AsciiArt {
            rows: vec!["ab".into(), "cd".into()],
        };
        assert_eq!(art.to_string(), "ab\ncd");
        assert_eq!(AsciiArt::default().to_string(), "");
    }

    #[test]
    fn test_resample_names() {
        assert_eq!(Resample::from_name("bicubic"), Some(Resample::CatmullRom));
        assert_eq!(Resample::from_name("Lanczos"), Some(Resample::Lanczos3));
        assert_eq!(Resample::from_name("box"), Some(Resample::Box));
        assert_eq!(Resample::from_name("sinc"), None);
        assert_eq!(Resample::Box.filter_type(), None);
        assert_eq!(
            Resample::from_name(Resample::Gaussian.name()),
            Some(Resample::Gaussian)
        );
    }
}
