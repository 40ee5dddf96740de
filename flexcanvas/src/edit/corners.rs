//! Rounded-corner masking.

use image::RgbaImage;

/// Replace the alpha channel of `image` with a rounded-rectangle mask.
///
/// Pixels inside the shape become opaque, pixels cut off by a corner become
/// fully transparent. The radius is clamped to half the shorter side.
pub fn add_rounded_corners(mut image: RgbaImage, radius: u32) -> RgbaImage {
    let (w, h) = image.dimensions();
    let r = radius.min(w / 2).min(h / 2) as f32;

    for (x, y, px) in image.enumerate_pixels_mut() {
        px[3] = if inside_rounded_rect(x, y, w, h, r) { 255 } else { 0 };
    }
    image
}

fn inside_rounded_rect(x: u32, y: u32, w: u32, h: u32, r: f32) -> bool {
    let px = x as f32 + 0.5;
    let py = y as f32 + 0.5;
    let (w, h) = (w as f32, h as f32);

    // Nearest corner-circle center, if the pixel lies in a corner square.
    let cx = if px < r {
        r
    } else if px > w - r {
        w - r
    } else {
        return true;
    };
    let cy = if py < r {
        r
    } else if py > h - r {
        h - r
    } else {
        return true;
    };

    let (dx, dy) = (px - cx, py - cy);
    dx * dx + dy * dy <= r * r
}
