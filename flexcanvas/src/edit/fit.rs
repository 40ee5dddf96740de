//! Resize-to-fit transforms.

use image::{Rgba, RgbaImage, imageops};
use image::imageops::FilterType;

use crate::encode::encode_png;
use crate::error::EditError;

/// Scale `image` to cover `width x height`, then crop the overflow evenly
/// from both sides.
pub fn resize_and_center_crop(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let (ow, oh) = image.dimensions();
    if ow == 0 || oh == 0 {
        return RgbaImage::new(width, height);
    }

    let scale = f64::max(width as f64 / ow as f64, height as f64 / oh as f64);
    // Truncating can land one pixel short of the target; never crop past the edge.
    let nw = ((ow as f64 * scale) as u32).max(width);
    let nh = ((oh as f64 * scale) as u32).max(height);
    let resized = imageops::resize(image, nw, nh, FilterType::Lanczos3);

    let left = (nw - width) / 2;
    let top = (nh - height) / 2;
    imageops::crop_imm(&resized, left, top, width, height).to_image()
}

/// Scale `image` to fit inside `width x height` and center it on a
/// transparent canvas of exactly that size.
pub fn letterbox(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 0]));
    let (ow, oh) = image.dimensions();
    if ow == 0 || oh == 0 {
        return canvas;
    }

    let scale = f64::min(width as f64 / ow as f64, height as f64 / oh as f64);
    let nw = (ow as f64 * scale) as u32;
    let nh = (oh as f64 * scale) as u32;
    let resized = imageops::resize(image, nw, nh, FilterType::Lanczos3);

    let left = (width as i64 - nw as i64).div_euclid(2);
    let top = (height as i64 - nh as i64).div_euclid(2);
    imageops::overlay(&mut canvas, &resized, left, top);
    canvas
}

/// [`letterbox`] encoded as PNG.
pub fn letterbox_png(image: &RgbaImage, width: u32, height: u32) -> Result<Vec<u8>, EditError> {
    Ok(encode_png(&letterbox(image, width, height))?)
}
