//! Main-axis justification and cross-axis alignment math.
//!
//! All arithmetic is on signed integers with floor division (`div_euclid`),
//! so offsets at odd remainders land on the same pixel every time, including
//! when the free space is negative.

use crate::style::{AlignItems, Justify};

/// Where a line starts on the main axis and how far apart its items are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainDistribution {
    /// Main-axis offset of the first item.
    pub start: i64,
    /// Space added after each item.
    pub gap: i64,
}

/// Inputs for distributing one line along the main axis.
#[derive(Debug, Clone, Copy)]
pub struct LineMetrics {
    /// Container size on the main axis.
    pub container_main: i64,
    pub padding: i64,
    /// Configured gap.
    pub gap: i64,
    /// Sum of item main sizes, gaps excluded.
    pub total_main: i64,
    pub count: i64,
}

impl LineMetrics {
    /// Space left on the line after the items (gaps not subtracted).
    pub fn free_space(&self) -> i64 {
        self.container_main - 2 * self.padding - self.total_main
    }

    fn internal_gaps(&self) -> i64 {
        self.gap * (self.count - 1)
    }
}

/// Compute the starting cursor and per-item gap for a line.
///
/// `space-between` with a single item falls back to `start`.
pub fn justify(mode: Justify, line: &LineMetrics) -> MainDistribution {
    let free = line.free_space();
    let padding = line.padding;

    match mode {
        Justify::Start => MainDistribution { start: padding, gap: line.gap },
        Justify::End => MainDistribution {
            start: line.container_main - padding - line.total_main - line.internal_gaps(),
            gap: line.gap,
        },
        Justify::Center => MainDistribution {
            start: padding + (free - line.internal_gaps()).div_euclid(2),
            gap: line.gap,
        },
        Justify::SpaceBetween if line.count > 1 => MainDistribution {
            start: padding,
            gap: free.div_euclid(line.count - 1),
        },
        Justify::SpaceBetween => MainDistribution { start: padding, gap: line.gap },
        Justify::SpaceAround => {
            let gap = free.div_euclid(line.count);
            MainDistribution {
                start: padding + gap.div_euclid(2),
                gap,
            }
        }
        Justify::SpaceEvenly => {
            let gap = free.div_euclid(line.count + 1);
            MainDistribution { start: padding + gap, gap }
        }
    }
}

/// Cross-axis position of one item.
///
/// `alignment_offset` is the slack between the canvas cross size and the
/// stacked line bands. `center` and `end` spend it on every line, which pushes
/// the whole block of lines toward the middle or the far edge.
pub fn cross_position(
    mode: AlignItems,
    cross_cursor: i64,
    alignment_offset: i64,
    line_cross: i64,
    item_cross: i64,
) -> i64 {
    match mode {
        AlignItems::Start => cross_cursor,
        AlignItems::Center => {
            cross_cursor + (alignment_offset + (line_cross - item_cross)).div_euclid(2)
        }
        AlignItems::End => cross_cursor + alignment_offset + (line_cross - item_cross),
    }
}
