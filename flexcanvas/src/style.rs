//! Layout style types.
//!
//! Keyword enums mirror the CSS flexbox vocabulary (`row`, `space-between`,
//! `nowrap`, ...). Each one parses from its keyword via [`FromStr`] and
//! deserializes from the same kebab-case literal, so an unknown literal fails
//! with a message naming it. [`Justify`] is the exception: an unknown
//! literal logs a warning and falls back to [`Justify::Start`].

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::LayoutError;

/// Direction of the main axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Items flow left to right; lines stack top to bottom.
    #[default]
    Row,
    /// Items flow top to bottom; lines stack left to right.
    Column,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Row => "row",
            Direction::Column => "column",
        }
    }

    /// Extent of a `width x height` rectangle along the main axis.
    #[inline]
    pub fn main(&self, width: u32, height: u32) -> u32 {
        match self {
            Direction::Row => width,
            Direction::Column => height,
        }
    }

    /// Extent of a `width x height` rectangle along the cross axis.
    #[inline]
    pub fn cross(&self, width: u32, height: u32) -> u32 {
        match self {
            Direction::Row => height,
            Direction::Column => width,
        }
    }

    /// Map a (main, cross) offset back to canvas (x, y).
    #[inline]
    pub fn to_xy(&self, main: i64, cross: i64) -> (i64, i64) {
        match self {
            Direction::Row => (main, cross),
            Direction::Column => (cross, main),
        }
    }
}

/// Main-axis distribution of the items of one line.
///
/// Unknown keywords resolve to `Start` instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Justify {
    /// Pack items at the start.
    #[default]
    Start,
    /// Pack items at the end.
    End,
    /// Center the packed items.
    Center,
    /// First and last item touch the padding edges; the rest of the free
    /// space goes between items.
    SpaceBetween,
    /// Equal space around each item (half-size at the edges).
    SpaceAround,
    /// Equal space between items and at both edges.
    SpaceEvenly,
}

impl Justify {
    pub fn as_str(&self) -> &'static str {
        match self {
            Justify::Start => "start",
            Justify::End => "end",
            Justify::Center => "center",
            Justify::SpaceBetween => "space-between",
            Justify::SpaceAround => "space-around",
            Justify::SpaceEvenly => "space-evenly",
        }
    }

    /// Resolve a keyword, falling back to `Start` for anything unknown.
    pub fn from_keyword(s: &str) -> Self {
        match s {
            "start" => Justify::Start,
            "end" => Justify::End,
            "center" => Justify::Center,
            "space-between" => Justify::SpaceBetween,
            "space-around" => Justify::SpaceAround,
            "space-evenly" => Justify::SpaceEvenly,
            other => {
                tracing::warn!("unknown justify {:?}, using start", other);
                Justify::Start
            }
        }
    }
}

impl<'de> Deserialize<'de> for Justify {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let keyword = String::deserialize(deserializer)?;
        Ok(Justify::from_keyword(&keyword))
    }
}

/// Cross-axis position of an item inside its line band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    #[default]
    Start,
    End,
    Center,
}

impl AlignItems {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlignItems::Start => "start",
            AlignItems::End => "end",
            AlignItems::Center => "center",
        }
    }
}

/// Whether items may break onto further lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlexWrap {
    #[serde(rename = "nowrap")]
    NoWrap,
    #[default]
    #[serde(rename = "wrap")]
    Wrap,
}

impl FlexWrap {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlexWrap::NoWrap => "nowrap",
            FlexWrap::Wrap => "wrap",
        }
    }
}

impl FromStr for Direction {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row" => Ok(Direction::Row),
            "column" => Ok(Direction::Column),
            other => Err(LayoutError::invalid("direction", other)),
        }
    }
}

impl FromStr for Justify {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Justify::from_keyword(s))
    }
}

impl FromStr for AlignItems {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(AlignItems::Start),
            "end" => Ok(AlignItems::End),
            "center" => Ok(AlignItems::Center),
            other => Err(LayoutError::invalid("align-items", other)),
        }
    }
}

impl FromStr for FlexWrap {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nowrap" => Ok(FlexWrap::NoWrap),
            "wrap" => Ok(FlexWrap::Wrap),
            other => Err(LayoutError::invalid("flex-wrap", other)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Justify {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AlignItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FlexWrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete configuration of a [`LayoutBox`](crate::LayoutBox).
///
/// `padding` applies equally to all four sides. `gap` separates items on the
/// main axis and lines on the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutStyle {
    pub padding: u32,
    pub gap: u32,
    pub direction: Direction,
    pub justify: Justify,
    pub align_items: AlignItems,
    pub wrap: FlexWrap,
    /// Grow the canvas along the cross axis when the lines do not fit.
    pub allow_resize: bool,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            padding: 0,
            gap: 0,
            direction: Direction::Row,
            justify: Justify::Start,
            align_items: AlignItems::Start,
            wrap: FlexWrap::Wrap,
            allow_resize: true,
        }
    }
}
