//! # image2canvas - Grayscale Canvas Documents from Images
//!
//! image2canvas turns a raster image into a standalone HTML page that
//! redraws it, in grayscale, on a `<canvas>`. The pixels travel as numeric
//! literals inside the page itself: no image asset, no network fetch, no
//! decoder at render time.
//!
//! The conversion is a straight line:
//!
//! 1. **Decode** the file and reduce it to one luminance byte per pixel
//! 2. **Pack** every four bytes into one 32-bit integer, big-endian
//! 3. **Render** the integers and dimensions into a fixed HTML template
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use image2canvas::{RasterDecoder, pipeline};
//!
//! let html = pipeline::convert(&RasterDecoder::new(), Path::new("photo.jpg"))?;
//! print!("{}", html);
//! # Ok::<(), image2canvas::Image2CanvasError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`decode`] | Decoder capability trait and `image`-crate backend |
//! | [`luminance`] | Luminance extraction and the grayscale image model |
//! | [`pack`] | 4-bytes-per-integer packing and its inverse |
//! | [`render`] | HTML canvas template emission |
//! | [`pipeline`] | End-to-end conversion |
//! | [`error`] | Error types |
//!
//! Output size is not optimized: the document is typically an order of
//! magnitude larger than a compressed input image.

pub mod decode;
pub mod error;
pub mod luminance;
pub mod pack;
pub mod pipeline;
pub mod render;

// Re-exports for convenience
pub use decode::{Decoder, RasterDecoder};
pub use error::Image2CanvasError;
pub use luminance::LuminanceImage;
