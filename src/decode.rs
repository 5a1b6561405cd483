//! # Image Decoding
//!
//! The converter never parses image formats itself. It talks to a decoder
//! through the [`Decoder`] capability set:
//!
//! | Operation | Meaning |
//! |-----------|---------|
//! | `open` | Read and decode a file into an opaque handle |
//! | `grayscale` | Reduce the handle to single-channel luminance |
//! | `size` | Report `(width, height)` in pixels |
//! | `pixel_data` | Row-major pixel bytes of the handle |
//!
//! [`RasterDecoder`] is the default implementation, backed by the `image`
//! crate. Any other type providing these four operations can be swapped in.

use std::path::Path;

use image::{DynamicImage, GenericImageView};

use crate::error::{Image2CanvasError, Result};

/// Capability interface for an external image decoder.
pub trait Decoder {
    /// Decoded image owned by the decoder.
    type Handle;

    /// Open and decode the image at `path`.
    fn open(&self, path: &Path) -> Result<Self::Handle>;

    /// Convert a decoded image to single-channel grayscale.
    fn grayscale(&self, handle: Self::Handle) -> Self::Handle;

    /// Image dimensions as `(width, height)`.
    fn size(&self, handle: &Self::Handle) -> (u32, u32);

    /// Pixel bytes in row-major order.
    ///
    /// For a grayscale handle this is exactly one byte per pixel.
    fn pixel_data(&self, handle: &Self::Handle) -> Vec<u8>;
}

/// Decoder backed by the `image` crate.
///
/// Supports whatever formats the crate was built with (PNG, JPEG, GIF,
/// BMP, WebP, ...). Color input is reduced with the Rec. 709 luma
/// transform.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterDecoder;

impl RasterDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode an in-memory encoded image.
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<DynamicImage> {
        image::load_from_memory(bytes)
            .map_err(|e| Image2CanvasError::Decode(format!("Failed to decode image data: {}", e)))
    }
}

impl Decoder for RasterDecoder {
    type Handle = DynamicImage;

    fn open(&self, path: &Path) -> Result<DynamicImage> {
        log::debug!("Decoding {}", path.display());
        let image = image::open(path).map_err(|e| {
            Image2CanvasError::Decode(format!("Failed to decode {}: {}", path.display(), e))
        })?;
        log::debug!(
            "Decoded {}x{} {:?} image",
            image.width(),
            image.height(),
            image.color()
        );
        Ok(image)
    }

    fn grayscale(&self, handle: DynamicImage) -> DynamicImage {
        match handle {
            DynamicImage::ImageLuma8(_) => handle,
            other => DynamicImage::ImageLuma8(other.to_luma8()),
        }
    }

    fn size(&self, handle: &DynamicImage) -> (u32, u32) {
        handle.dimensions()
    }

    fn pixel_data(&self, handle: &DynamicImage) -> Vec<u8> {
        match handle {
            DynamicImage::ImageLuma8(gray) => gray.as_raw().clone(),
            other => other.to_luma8().into_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    #[test]
    fn test_open_missing_file_is_decode_error() {
        let decoder = RasterDecoder::new();
        let result = decoder.open(Path::new("/definitely/not/here.png"));
        match result {
            Err(Image2CanvasError::Decode(msg)) => {
                assert!(msg.contains("/definitely/not/here.png"), "{}", msg);
            }
            other => panic!("Expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_bytes_rejects_garbage() {
        let decoder = RasterDecoder::new();
        let result = decoder.decode_bytes(&[0xFF, 0xFE, 0x00, 0x01]);
        assert!(matches!(result, Err(Image2CanvasError::Decode(_))));
    }

    #[test]
    fn test_grayscale_keeps_luma_untouched() {
        let decoder = RasterDecoder::new();
        let gray = GrayImage::from_raw(2, 1, vec![7, 200]).unwrap();
        let handle = decoder.grayscale(DynamicImage::ImageLuma8(gray));
        assert_eq!(decoder.size(&handle), (2, 1));
        assert_eq!(decoder.pixel_data(&handle), vec![7, 200]);
    }

    #[test]
    fn test_grayscale_reduces_color_to_one_byte_per_pixel() {
        let decoder = RasterDecoder::new();
        let mut rgb = RgbImage::new(3, 2);
        rgb.put_pixel(0, 0, Rgb([255, 255, 255]));
        rgb.put_pixel(1, 0, Rgb([0, 0, 0]));
        let handle = decoder.grayscale(DynamicImage::ImageRgb8(rgb));

        assert!(matches!(handle, DynamicImage::ImageLuma8(_)));
        let data = decoder.pixel_data(&handle);
        assert_eq!(data.len(), 6);
        assert_eq!(data[0], 255);
        assert_eq!(data[1], 0);
    }

    #[test]
    fn test_pixel_data_is_row_major() {
        let decoder = RasterDecoder::new();
        let mut gray = GrayImage::new(2, 2);
        gray.put_pixel(1, 0, Luma([1]));
        gray.put_pixel(0, 1, Luma([2]));
        let handle = DynamicImage::ImageLuma8(gray);
        assert_eq!(decoder.pixel_data(&handle), vec![0, 1, 2, 0]);
    }
}
