//! Background compositing.

use image::{Rgba, RgbaImage, imageops};

use crate::error::EditError;

use super::color::parse_color;

/// Alpha applied to string colors by [`change_background_str`] unless told
/// otherwise.
pub const DEFAULT_BACKGROUND_ALPHA: u8 = 180;

/// Composite `image` over a solid `background`.
pub fn change_background(image: &RgbaImage, background: Rgba<u8>) -> RgbaImage {
    let mut out = RgbaImage::from_pixel(image.width(), image.height(), background);
    imageops::overlay(&mut out, image, 0, 0);
    out
}

/// Composite `image` over a background given as a CSS color string.
///
/// The color's own alpha is replaced by `alpha`.
pub fn change_background_str(image: &RgbaImage, color: &str, alpha: u8) -> Result<RgbaImage, EditError> {
    let mut background = parse_color(color)?;
    background[3] = alpha;
    Ok(change_background(image, background))
}
