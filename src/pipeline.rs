//! Decode → extract → pack → render.

use std::path::Path;

use crate::decode::Decoder;
use crate::error::Result;
use crate::luminance::{self, LuminanceImage};
use crate::pack;
use crate::render;

/// Render an already extracted image.
pub fn render_image(image: &LuminanceImage) -> String {
    let packed = pack::pack(image.pixels());
    log::info!(
        "Packed {} pixels into {} integers",
        image.pixels().len(),
        packed.len()
    );
    render::render(image.width(), image.height(), &packed)
}

/// Convert the image at `path` into a complete canvas document.
///
/// The whole document is built in memory; callers write it only after
/// every step has succeeded.
pub fn convert<D: Decoder>(decoder: &D, path: &Path) -> Result<String> {
    let image = luminance::extract(decoder, path)?;
    log::info!(
        "Extracted {}x{} luminance image from {}",
        image.width(),
        image.height(),
        path.display()
    );
    let document = render_image(&image);
    log::info!("Generated document is {} bytes", document.len());
    Ok(document)
}
