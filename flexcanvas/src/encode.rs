//! Raster encoding of finished canvases.

use std::io::Cursor;

use image::{ImageFormat, ImageResult, RgbaImage};

/// Encode an image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> ImageResult<Vec<u8>> {
    let mut png_data = Vec::new();
    image.write_to(&mut Cursor::new(&mut png_data), ImageFormat::Png)?;
    Ok(png_data)
}
