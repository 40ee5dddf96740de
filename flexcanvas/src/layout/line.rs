//! Line breaking.
//!
//! Items are consumed in order and packed onto the current line until the
//! next one would overflow the available main-axis space, at which point a new
//! line starts. A line always holds at least one item, so an item larger than
//! the available space still gets placed, alone on its line.

use std::ops::Range;

use crate::style::FlexWrap;

/// Main/cross size of one flattened item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSize {
    pub main: u32,
    pub cross: u32,
}

impl ItemSize {
    pub const fn new(main: u32, cross: u32) -> Self {
        Self { main, cross }
    }
}

/// A run of consecutive items sharing one row (or column) band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Indices of the items on this line.
    pub items: Range<usize>,
    /// Sum of item main sizes, gaps excluded.
    pub total_main: i64,
    /// Sum of item main sizes plus the gaps between them.
    pub main_extent: i64,
    /// Largest item cross size.
    pub cross_extent: i64,
}

impl Line {
    fn start(index: usize, size: ItemSize) -> Self {
        Self {
            items: index..index + 1,
            total_main: size.main as i64,
            main_extent: size.main as i64,
            cross_extent: size.cross as i64,
        }
    }

    fn push(&mut self, size: ItemSize, gap: i64) {
        self.items.end += 1;
        self.total_main += size.main as i64;
        self.main_extent += size.main as i64 + gap;
        self.cross_extent = self.cross_extent.max(size.cross as i64);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Split `sizes` into lines that fit `available` main-axis pixels.
///
/// `available` is the container main size minus both paddings and may be
/// zero or negative for tiny containers. With [`FlexWrap::NoWrap`] every item
/// lands on a single line regardless of overflow.
pub fn break_lines(sizes: &[ItemSize], available: i64, gap: u32, wrap: FlexWrap) -> Vec<Line> {
    let gap = gap as i64;
    let mut lines: Vec<Line> = Vec::new();

    for (index, &size) in sizes.iter().enumerate() {
        let fits = lines.last().is_some_and(|line| {
            wrap == FlexWrap::NoWrap || line.main_extent + size.main as i64 + gap <= available
        });
        if !fits {
            lines.push(Line::start(index, size));
        } else if let Some(line) = lines.last_mut() {
            line.push(size, gap);
        }
    }

    lines
}

/// Total cross extent of stacked lines: each line contributes its band plus
/// one gap, trailing gap included.
pub fn total_cross_extent(lines: &[Line], gap: u32) -> i64 {
    lines.iter().map(|l| l.cross_extent + gap as i64).sum()
}
