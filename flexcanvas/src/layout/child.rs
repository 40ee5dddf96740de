//! Layout children.

use image::{DynamicImage, RgbaImage};

use super::LayoutBox;

/// A child of a [`LayoutBox`]: either a finished image or a nested container.
///
/// Nested boxes are boxed to break the size recursion.
pub enum Child {
    /// An image pasted as-is.
    Image(RgbaImage),
    /// A nested container, rendered before its parent lays it out.
    Nested(Box<LayoutBox>),
}

impl Child {
    /// Flattened pixels of this child.
    ///
    /// For a nested box this is its canvas, which is only final after the
    /// box has been rendered.
    pub fn image(&self) -> &RgbaImage {
        match self {
            Child::Image(img) => img,
            Child::Nested(b) => b.image(),
        }
    }

    /// Current `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image().dimensions()
    }

    /// Render nested boxes; plain images need nothing.
    pub(crate) fn flatten(&mut self) {
        if let Child::Nested(b) = self {
            b.render();
        }
    }
}

impl From<RgbaImage> for Child {
    fn from(img: RgbaImage) -> Self {
        Child::Image(img)
    }
}

impl From<DynamicImage> for Child {
    fn from(img: DynamicImage) -> Self {
        Child::Image(img.into_rgba8())
    }
}

impl From<LayoutBox> for Child {
    fn from(b: LayoutBox) -> Self {
        Child::Nested(Box::new(b))
    }
}

impl std::fmt::Debug for Child {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (w, h) = self.dimensions();
        match self {
            Child::Image(_) => write!(f, "Image({}x{})", w, h),
            Child::Nested(b) => write!(f, "Nested({}x{}, {} children)", w, h, b.len()),
        }
    }
}
