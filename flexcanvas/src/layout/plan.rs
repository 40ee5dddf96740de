//! Pure layout pass: item sizes in, line bands and paste offsets out.
//!
//! Nothing here touches pixels, so the whole algorithm can be exercised on
//! plain numbers. [`LayoutBox::render`](super::LayoutBox::render) feeds the
//! result to the compositor.

use crate::style::{Direction, LayoutStyle};

use super::distribute::{LineMetrics, cross_position, justify};
use super::line::{ItemSize, Line, break_lines, total_cross_extent};

/// Canvas growth on the trailing cross edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Growth {
    /// Pixels added along the cross axis.
    pub amount: u32,
    /// Canvas size after growing.
    pub width: u32,
    pub height: u32,
}

/// Result of laying out one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutPlan {
    pub lines: Vec<Line>,
    /// Paste offset `(x, y)` of each item, in input order.
    pub positions: Vec<(i64, i64)>,
    /// Sum of line bands plus one gap per line.
    pub total_cross: i64,
    pub growth: Option<Growth>,
}

impl LayoutPlan {
    /// Final canvas size, after growth if any.
    pub fn canvas_size(&self, width: u32, height: u32) -> (u32, u32) {
        match self.growth {
            Some(g) => (g.width, g.height),
            None => (width, height),
        }
    }
}

/// Lay out items of the given `(width, height)` inside a `width x height` canvas.
pub fn compute(style: &LayoutStyle, width: u32, height: u32, items: &[(u32, u32)]) -> LayoutPlan {
    let dir = style.direction;
    let padding = style.padding as i64;
    let gap = style.gap as i64;

    let sizes: Vec<ItemSize> = items
        .iter()
        .map(|&(w, h)| ItemSize::new(dir.main(w, h), dir.cross(w, h)))
        .collect();

    let container_main = dir.main(width, height) as i64;
    let lines = break_lines(&sizes, container_main - 2 * padding, style.gap, style.wrap);
    let total_cross = total_cross_extent(&lines, style.gap);

    let mut canvas_cross = dir.cross(width, height) as i64;
    let mut growth = None;
    if total_cross > canvas_cross {
        if style.allow_resize {
            let amount = (total_cross - canvas_cross + 2 * padding) as u32;
            let (w, h) = match dir {
                Direction::Row => (width, height + amount),
                Direction::Column => (width + amount, height),
            };
            growth = Some(Growth { amount, width: w, height: h });
            canvas_cross = dir.cross(w, h) as i64;
        } else {
            tracing::debug!(
                "lines need {}px on the cross axis but canvas has {}px; resize disabled",
                total_cross,
                canvas_cross
            );
        }
    }

    let alignment_offset = canvas_cross - total_cross;

    let mut positions = vec![(0i64, 0i64); sizes.len()];
    let mut cross_cursor = padding;
    for line in &lines {
        if line.main_extent > container_main - 2 * padding && line.len() > 1 {
            tracing::warn!(
                "line of {} items spans {}px, more than the {}px available",
                line.len(),
                line.main_extent,
                container_main - 2 * padding
            );
        }

        let dist = justify(
            style.justify,
            &LineMetrics {
                container_main,
                padding,
                gap,
                total_main: line.total_main,
                count: line.len() as i64,
            },
        );

        let mut main_cursor = dist.start;
        for index in line.items.clone() {
            let size = sizes[index];
            let cross = cross_position(
                style.align_items,
                cross_cursor,
                alignment_offset,
                line.cross_extent,
                size.cross as i64,
            );
            positions[index] = dir.to_xy(main_cursor, cross);
            main_cursor += size.main as i64 + dist.gap;
        }

        cross_cursor += line.cross_extent + gap;
    }

    LayoutPlan {
        lines,
        positions,
        total_cross,
        growth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{AlignItems, FlexWrap, Justify};

    #[test]
    fn test_row_start_single_line() {
        let style = LayoutStyle { gap: 5, padding: 2, ..Default::default() };
        let plan = compute(&style, 100, 50, &[(10, 10), (20, 15)]);
        assert_eq!(plan.lines.len(), 1);
        assert_eq!(plan.positions, vec![(2, 2), (17, 2)]);
        assert_eq!(plan.total_cross, 20);
        assert!(plan.growth.is_none());
    }

    #[test]
    fn test_space_between_two_items() {
        let style = LayoutStyle { justify: Justify::SpaceBetween, gap: 0, ..Default::default() };
        let plan = compute(&style, 100, 20, &[(10, 5), (20, 5)]);
        assert_eq!(plan.positions, vec![(0, 0), (80, 0)]);
    }

    #[test]
    fn test_wrap_stacks_lines_with_gap() {
        let style = LayoutStyle { gap: 2, ..Default::default() };
        // Available width 50: 30 fits, 30 + 2 + 30 does not.
        let plan = compute(&style, 50, 100, &[(30, 10), (30, 20), (15, 5)]);
        assert_eq!(plan.lines.len(), 2);
        assert_eq!(plan.positions[0], (0, 0));
        assert_eq!(plan.positions[1], (0, 12));
        assert_eq!(plan.positions[2], (32, 12));
        assert_eq!(plan.total_cross, 10 + 2 + 20 + 2);
    }

    #[test]
    fn test_column_direction_swaps_axes() {
        let style = LayoutStyle { direction: Direction::Column, gap: 1, ..Default::default() };
        let plan = compute(&style, 40, 25, &[(5, 10), (8, 10), (3, 10)]);
        // Main axis is height 25: two items (10 + 1 + 10) per column.
        assert_eq!(plan.lines.len(), 2);
        assert_eq!(plan.positions, vec![(0, 0), (0, 11), (9, 0)]);
    }

    #[test]
    fn test_cross_overflow_grows_canvas() {
        let style = LayoutStyle { padding: 3, ..Default::default() };
        // Each 40px item fills a line (available = 44); two lines of 30 = 60 > 50.
        let plan = compute(&style, 50, 50, &[(40, 30), (40, 30)]);
        let growth = plan.growth.expect("canvas should grow");
        assert_eq!(plan.total_cross, 60);
        assert_eq!(growth.amount, 60 - 50 + 6);
        assert_eq!((growth.width, growth.height), (50, 66));
        assert_eq!(plan.positions, vec![(3, 3), (3, 33)]);
    }

    #[test]
    fn test_column_overflow_grows_right() {
        let style = LayoutStyle { direction: Direction::Column, ..Default::default() };
        let plan = compute(&style, 10, 20, &[(8, 20), (8, 20)]);
        let growth = plan.growth.unwrap();
        assert_eq!((growth.width, growth.height), (16, 20));
        assert_eq!(plan.canvas_size(10, 20), (16, 20));
    }

    #[test]
    fn test_resize_disabled_keeps_canvas() {
        let style = LayoutStyle { allow_resize: false, ..Default::default() };
        let plan = compute(&style, 50, 50, &[(40, 30), (40, 30)]);
        assert!(plan.growth.is_none());
        assert_eq!(plan.canvas_size(50, 50), (50, 50));
        assert_eq!(plan.positions[1], (0, 30));
    }

    #[test]
    fn test_align_center_uses_slack() {
        let style = LayoutStyle { align_items: AlignItems::Center, ..Default::default() };
        let plan = compute(&style, 100, 50, &[(10, 20), (10, 10)]);
        // Slack = 50 - 20 = 30.
        assert_eq!(plan.positions, vec![(0, 15), (10, 20)]);
    }

    #[test]
    fn test_align_end_uses_slack() {
        let style = LayoutStyle { align_items: AlignItems::End, ..Default::default() };
        let plan = compute(&style, 100, 50, &[(10, 20), (10, 10)]);
        assert_eq!(plan.positions, vec![(0, 30), (10, 40)]);
    }

    #[test]
    fn test_nowrap_overflow_passes_through() {
        let style = LayoutStyle { wrap: FlexWrap::NoWrap, ..Default::default() };
        let plan = compute(&style, 50, 20, &[(30, 10), (30, 10)]);
        assert_eq!(plan.lines.len(), 1);
        assert_eq!(plan.positions, vec![(0, 0), (30, 0)]);
        assert!(plan.growth.is_none());
    }

    #[test]
    fn test_single_line_advances_sum() {
        let style = LayoutStyle { gap: 4, justify: Justify::End, padding: 1, ..Default::default() };
        let items = [(9, 3), (11, 3), (7, 3)];
        let plan = compute(&style, 80, 10, &items);
        let first = plan.positions[0].0;
        let last = plan.positions[2].0 + 7;
        assert_eq!(last - first, 27 + 4 * 2);
        assert_eq!(last, 80 - 1);
    }
}
