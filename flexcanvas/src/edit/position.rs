//! Anchored placement of one image on another.

use image::{RgbaImage, imageops};

use crate::error::EditError;

/// Edge offsets for [`position_relative`].
///
/// At most one of `top`/`bottom` and one of `left`/`right` may be set. An
/// axis with neither set anchors at offset 0 from the top or left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Anchor {
    pub top: Option<i64>,
    pub bottom: Option<i64>,
    pub left: Option<i64>,
    pub right: Option<i64>,
}

impl Anchor {
    pub fn top(mut self, offset: i64) -> Self {
        self.top = Some(offset);
        self
    }

    pub fn bottom(mut self, offset: i64) -> Self {
        self.bottom = Some(offset);
        self
    }

    pub fn left(mut self, offset: i64) -> Self {
        self.left = Some(offset);
        self
    }

    pub fn right(mut self, offset: i64) -> Self {
        self.right = Some(offset);
        self
    }

    /// Resolve to an `(x, y)` paste offset for an `image` placed on `base`.
    pub fn resolve(&self, base: (u32, u32), image: (u32, u32)) -> Result<(i64, i64), EditError> {
        if self.top.is_some() && self.bottom.is_some() {
            return Err(EditError::ConflictingAnchor("top", "bottom"));
        }
        if self.left.is_some() && self.right.is_some() {
            return Err(EditError::ConflictingAnchor("left", "right"));
        }

        let y = match (self.top, self.bottom) {
            (_, Some(bottom)) => base.1 as i64 - bottom - image.1 as i64,
            (top, None) => top.unwrap_or(0),
        };
        let x = match (self.left, self.right) {
            (_, Some(right)) => base.0 as i64 - right - image.0 as i64,
            (left, None) => left.unwrap_or(0),
        };
        Ok((x, y))
    }
}

/// Paste `image` onto `base` at the anchored position, alpha-blended.
///
/// Conflicting anchors fail before `base` is touched.
pub fn position_relative(
    mut base: RgbaImage,
    image: &RgbaImage,
    anchor: Anchor,
) -> Result<RgbaImage, EditError> {
    let (x, y) = anchor.resolve(base.dimensions(), image.dimensions())?;
    imageops::overlay(&mut base, image, x, y);
    Ok(base)
}
