//! # Luminance Extraction
//!
//! Turns a decoded image into a flat, row-major sequence of luminance bytes
//! (0 = black, 255 = white). Pixel `p` sits at `x = p % width`,
//! `y = p / width`.
//!
//! ```
//! use image2canvas::luminance::LuminanceImage;
//!
//! let image = LuminanceImage::new(2, 2, vec![10, 20, 30, 40])?;
//! assert_eq!(image.get(1, 1), Some(40));
//! # Ok::<(), image2canvas::Image2CanvasError>(())
//! ```

use std::path::Path;

use image::GrayImage;

use crate::decode::Decoder;
use crate::error::{Image2CanvasError, Result};

/// A single-channel grayscale image.
///
/// Invariant: `pixels.len() == width * height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuminanceImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl LuminanceImage {
    /// Build an image from raw luminance bytes, checking the length.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Image2CanvasError::InvalidImage(format!(
                "{}x{} image needs {} pixels, decoder returned {}",
                width,
                height,
                expected,
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap an already-decoded 8-bit grayscale buffer.
    pub fn from_gray(gray: GrayImage) -> Self {
        let (width, height) = gray.dimensions();
        Self {
            width,
            height,
            pixels: gray.into_raw(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Luminance at `(x, y)`, or `None` outside the image.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = x as usize + y as usize * self.width as usize;
        self.pixels.get(idx).copied()
    }

    /// Split into `(width, height, pixels)`.
    pub fn into_parts(self) -> (u32, u32, Vec<u8>) {
        (self.width, self.height, self.pixels)
    }
}

/// Decode `path` with `decoder` and return its luminance bytes.
///
/// The handle is always forced through [`Decoder::grayscale`] first, so
/// color input is accepted. Decoder failures propagate unchanged.
pub fn extract<D: Decoder>(decoder: &D, path: &Path) -> Result<LuminanceImage> {
    let handle = decoder.grayscale(decoder.open(path)?);
    let (width, height) = decoder.size(&handle);
    let pixels = decoder.pixel_data(&handle);
    LuminanceImage::new(width, height, pixels)
}
