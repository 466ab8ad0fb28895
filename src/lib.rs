//! asciify library crate.
//!
//! Converts raster images into ASCII art by quantizing pixel brightness
//! into an ordered character ramp. See [`render::render`].

pub mod ascii;
pub mod cli;
pub mod config;
pub mod render;

pub use ascii::{CharSet, Ramp, RampError};
pub use render::{render, render_image, AsciiArt, RenderError, RenderOptions, Resample};
