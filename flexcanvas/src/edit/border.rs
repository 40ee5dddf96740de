//! Solid borders.

use image::{Rgba, RgbaImage, imageops};

/// Surround `image` with a `thickness`-pixel border of `color`.
///
/// The original pixels are copied over the border fill without blending.
pub fn add_border(image: &RgbaImage, thickness: u32, color: Rgba<u8>) -> RgbaImage {
    let mut bordered = RgbaImage::from_pixel(
        image.width() + 2 * thickness,
        image.height() + 2 * thickness,
        color,
    );
    imageops::replace(&mut bordered, image, thickness as i64, thickness as i64);
    bordered
}
