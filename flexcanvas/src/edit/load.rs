//! Image loading.

use std::path::Path;

use image::RgbaImage;

use crate::error::EditError;

/// Decode an image file into RGBA.
pub fn open_image(path: impl AsRef<Path>) -> Result<RgbaImage, EditError> {
    let path = path.as_ref();
    let img = image::open(path)?;
    tracing::debug!("Loaded image {}x{} from {:?}", img.width(), img.height(), path);
    Ok(img.into_rgba8())
}

/// Decode an in-memory encoded image into RGBA.
pub fn load_image(bytes: &[u8]) -> Result<RgbaImage, EditError> {
    // Format is detected from the header, not an extension.
    Ok(image::load_from_memory(bytes)?.into_rgba8())
}
