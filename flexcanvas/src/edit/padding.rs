//! Canvas padding.

use std::fmt;
use std::str::FromStr;

use image::{Rgba, RgbaImage, imageops};

use crate::error::EditError;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Which edge(s) receive padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingEdge {
    /// All four sides.
    All,
    Left,
    Right,
    Top,
    Bottom,
    /// Left and right.
    X,
    /// Top and bottom.
    Y,
}

impl PaddingEdge {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaddingEdge::All => "all",
            PaddingEdge::Left => "left",
            PaddingEdge::Right => "right",
            PaddingEdge::Top => "top",
            PaddingEdge::Bottom => "bottom",
            PaddingEdge::X => "x",
            PaddingEdge::Y => "y",
        }
    }

    /// Added `(width, height)` and the offset of the original content.
    fn geometry(&self, amount: u32) -> ((u32, u32), (i64, i64)) {
        let a = amount as i64;
        match self {
            PaddingEdge::All => ((2 * amount, 2 * amount), (a, a)),
            PaddingEdge::Left => ((amount, 0), (a, 0)),
            PaddingEdge::Right => ((amount, 0), (0, 0)),
            PaddingEdge::Top => ((0, amount), (0, a)),
            PaddingEdge::Bottom => ((0, amount), (0, 0)),
            PaddingEdge::X => ((2 * amount, 0), (a, 0)),
            PaddingEdge::Y => ((0, 2 * amount), (0, a)),
        }
    }
}

impl FromStr for PaddingEdge {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(PaddingEdge::All),
            "left" => Ok(PaddingEdge::Left),
            "right" => Ok(PaddingEdge::Right),
            "top" => Ok(PaddingEdge::Top),
            "bottom" => Ok(PaddingEdge::Bottom),
            "x" => Ok(PaddingEdge::X),
            "y" => Ok(PaddingEdge::Y),
            other => Err(EditError::InvalidKeyword {
                kind: "padding edge",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for PaddingEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fill used for the added space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaddingFill {
    /// Fully transparent on every edge.
    #[default]
    Transparent,
    /// Opaque white for the symmetric `x`/`y` edges and transparent for the
    /// rest, matching images produced by older compositions.
    Legacy,
    /// A caller-chosen color on every edge.
    Color(Rgba<u8>),
}

impl PaddingFill {
    fn color_for(&self, edge: PaddingEdge) -> Rgba<u8> {
        match (self, edge) {
            (PaddingFill::Transparent, _) => TRANSPARENT,
            (PaddingFill::Legacy, PaddingEdge::X | PaddingEdge::Y) => WHITE,
            (PaddingFill::Legacy, _) => TRANSPARENT,
            (PaddingFill::Color(c), _) => *c,
        }
    }
}

/// Enlarge `image` by `amount` pixels on `edge`, filling the new space with
/// transparency.
pub fn add_padding(image: &RgbaImage, amount: u32, edge: PaddingEdge) -> RgbaImage {
    add_padding_with_fill(image, amount, edge, PaddingFill::Transparent)
}

/// Enlarge `image` by `amount` pixels on `edge` with an explicit fill.
///
/// The original is copied over the fill without blending, so its pixels
/// (alpha included) come through unchanged.
pub fn add_padding_with_fill(
    image: &RgbaImage,
    amount: u32,
    edge: PaddingEdge,
    fill: PaddingFill,
) -> RgbaImage {
    let ((dw, dh), (x, y)) = edge.geometry(amount);
    let mut padded = RgbaImage::from_pixel(image.width() + dw, image.height() + dh, fill.color_for(edge));
    imageops::replace(&mut padded, image, x, y);
    padded
}
