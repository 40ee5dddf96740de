//! End-to-end layout tests.
//!
//! These render real canvases and inspect pixels, covering the properties the
//! layout engine guarantees: wrap bounds, justify arithmetic, idempotent
//! rendering, cross-axis growth and nested boxes.

use flexcanvas::layout::plan;
use flexcanvas::{
    AlignItems, Child, Direction, FlexWrap, Justify, LayoutBox, LayoutError, LayoutStyle,
};
use image::{Rgba, RgbaImage};

const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

fn solid(w: u32, h: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(w, h, color)
}

/// First x in row `y` holding `color`, if any.
fn first_x(img: &RgbaImage, y: u32, color: Rgba<u8>) -> Option<u32> {
    (0..img.width()).find(|&x| img.get_pixel(x, y) == &color)
}

/// First y in column `x` holding `color`, if any.
fn first_y(img: &RgbaImage, x: u32, color: Rgba<u8>) -> Option<u32> {
    (0..img.height()).find(|&y| img.get_pixel(x, y) == &color)
}

#[test]
fn space_between_two_items_exact_pixels() {
    let mut b = LayoutBox::blank(100, 20, CLEAR).justify(Justify::SpaceBetween).gap(9);
    b.add_items([solid(10, 20, RED), solid(20, 20, BLUE)]).unwrap();
    let img = b.render();
    assert_eq!(first_x(img, 0, RED), Some(0));
    assert_eq!(first_x(img, 0, BLUE), Some(80));
    assert_eq!(img.get_pixel(99, 0), &BLUE);
}

#[test]
fn every_justify_mode_places_items() {
    let widths = [10u32, 20, 5];
    let expected = [
        (Justify::Start, [2, 15, 38]),
        // 100 - 2 - 35 - 6 = 57
        (Justify::End, [57, 70, 93]),
        // 2 + (96 - 35 - 6) / 2 = 29
        (Justify::Center, [29, 42, 65]),
        // gap (96 - 35) / 2 = 30
        (Justify::SpaceBetween, [2, 42, 92]),
        // gap 61 / 3 = 20, start 2 + 10
        (Justify::SpaceAround, [12, 42, 82]),
        // gap 61 / 4 = 15, start 2 + 15
        (Justify::SpaceEvenly, [17, 42, 77]),
    ];
    let colors = [RED, GREEN, BLUE];

    for (mode, xs) in expected {
        let mut b = LayoutBox::blank(100, 10, CLEAR).padding(2).gap(3).justify(mode);
        b.add_items(widths.iter().zip(colors).map(|(&w, c)| solid(w, 6, c))).unwrap();
        let img = b.render();
        for (color, x) in colors.iter().zip(xs) {
            assert_eq!(first_x(img, 2, *color), Some(x), "{} {:?}", mode, color);
        }
    }
}

#[test]
fn wrapped_lines_respect_available_space() {
    let widths = [13u32, 40, 7, 22, 61, 5, 5, 5, 30, 90, 12];
    let style = LayoutStyle { padding: 4, gap: 3, ..Default::default() };
    let items: Vec<(u32, u32)> = widths.iter().map(|&w| (w, 8)).collect();
    let result = plan::compute(&style, 80, 20, &items);

    let available = 80 - 2 * 4;
    for line in &result.lines {
        let extent: i64 = line.items.clone().map(|i| widths[i] as i64).sum::<i64>()
            + 3 * (line.len() as i64 - 1);
        assert_eq!(extent, line.main_extent);
        assert!(extent <= available || line.len() == 1, "{:?}", line);
    }
    // The 90px item cannot fit anywhere and sits alone.
    assert!(result.lines.iter().any(|l| l.items == (9..10)));
}

#[test]
fn add_after_render_is_rejected_and_list_unchanged() {
    let mut b = LayoutBox::blank(10, 10, CLEAR);
    b.add_item(solid(3, 3, RED)).unwrap();
    b.render();
    assert!(matches!(b.add_items([solid(1, 1, RED)]), Err(LayoutError::AlreadyRendered)));
    assert_eq!(b.len(), 1);
}

#[test]
fn render_twice_is_pixel_identical() {
    let mut b = LayoutBox::blank(30, 30, CLEAR)
        .gap(2)
        .align_items(AlignItems::Center)
        .justify(Justify::Center);
    b.add_items([solid(12, 9, RED), solid(12, 14, GREEN), solid(12, 5, BLUE)]).unwrap();
    let once = b.render().clone();
    let twice = b.render().clone();
    assert_eq!(once, twice);
}

#[test]
fn cross_overflow_grows_once_and_keeps_pixels() {
    let mut canvas = solid(50, 40, CLEAR);
    canvas.put_pixel(49, 0, GREEN);
    let mut b = LayoutBox::with_style(canvas, LayoutStyle { padding: 2, gap: 1, ..Default::default() });
    // available 46: each 30px item takes its own line; 3 lines x (20 + 1) = 63 > 40
    b.add_items([solid(30, 20, RED), solid(30, 20, RED), solid(30, 20, BLUE)]).unwrap();
    let img = b.render().clone();

    let total_cross = 63;
    assert_eq!(img.height(), 40 + (total_cross - 40 + 2 * 2));
    assert_eq!(b.size(), (50, 67));
    assert_eq!(img.get_pixel(49, 0), &GREEN);
    assert_eq!(first_y(&img, 2, BLUE), Some(2 + 21 + 21));

    // A second render does not grow again.
    b.render();
    assert_eq!(b.size(), (50, 67));
}

#[test]
fn column_layout_grows_to_the_right() {
    let mut b = LayoutBox::blank(10, 30, CLEAR).direction(Direction::Column);
    b.add_items([solid(8, 20, RED), solid(8, 20, BLUE)]).unwrap();
    let img = b.render();
    assert_eq!(img.dimensions(), (16, 30));
    assert_eq!(first_x(img, 0, BLUE), Some(8));
}

#[test]
fn align_end_pushes_items_down() {
    let mut b = LayoutBox::blank(40, 30, CLEAR).align_items(AlignItems::End);
    b.add_items([solid(10, 10, RED), solid(10, 4, BLUE)]).unwrap();
    let img = b.render();
    // slack 20: red at 20, blue at 20 + 6
    assert_eq!(first_y(img, 0, RED), Some(20));
    assert_eq!(first_y(img, 10, BLUE), Some(26));
}

#[test]
fn nowrap_overflow_is_clipped_not_wrapped() {
    let mut b = LayoutBox::blank(25, 10, CLEAR).wrap(FlexWrap::NoWrap);
    b.add_items([solid(15, 10, RED), solid(15, 10, BLUE)]).unwrap();
    let img = b.render();
    assert_eq!(img.dimensions(), (25, 10));
    assert_eq!(first_x(img, 0, BLUE), Some(15));
    assert_eq!(img.get_pixel(24, 9), &BLUE);
}

#[test]
fn nested_box_is_an_opaque_leaf() {
    let mut inner = LayoutBox::blank(12, 12, CLEAR).direction(Direction::Column);
    inner.add_items([solid(12, 5, RED), solid(12, 5, GREEN)]).unwrap();

    let mut outer = LayoutBox::blank(40, 12, CLEAR).justify(Justify::End);
    outer.add_items([Child::from(solid(6, 12, BLUE)), Child::from(inner)]).unwrap();
    let img = outer.render();

    // 6 + 12 packed at the end: blue strip at 22, inner box at 28
    assert_eq!(first_x(img, 0, BLUE), Some(22));
    assert_eq!(first_x(img, 0, RED), Some(28));
    assert_eq!(first_y(img, 28, GREEN), Some(5));
    assert_eq!(img.get_pixel(28, 11), &CLEAR);
}

#[test]
fn deeply_nested_boxes_render_bottom_up() {
    let mut leaf_box = LayoutBox::blank(4, 4, CLEAR);
    leaf_box.add_item(solid(4, 4, RED)).unwrap();
    let mut middle = LayoutBox::blank(6, 6, CLEAR).padding(1);
    middle.add_item(leaf_box).unwrap();
    let mut top = LayoutBox::blank(8, 8, CLEAR).padding(1);
    top.add_item(middle).unwrap();

    let img = top.into_image();
    assert_eq!(img.get_pixel(1, 1), &CLEAR);
    assert_eq!(img.get_pixel(2, 2), &RED);
    assert_eq!(img.get_pixel(5, 5), &RED);
    assert_eq!(img.get_pixel(6, 6), &CLEAR);
}
