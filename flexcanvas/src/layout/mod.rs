//! Flexbox-style layout of images onto a canvas.
//!
//! # Architecture
//!
//! ```text
//! add_items() builds the child list -> render() flattens nested boxes
//!   -> plan::compute() breaks lines and places items -> overlay onto canvas
//! ```
//!
//! A box renders exactly once. Afterwards it is a read-only image and
//! rejects new children.

pub mod child;
pub mod distribute;
pub mod line;
pub mod plan;

pub use child::Child;
pub use distribute::{MainDistribution, cross_position, justify};
pub use line::{ItemSize, Line, break_lines};
pub use plan::{Growth, LayoutPlan};

use image::{Rgba, RgbaImage, imageops};

use crate::edit::{PaddingEdge, add_padding};
use crate::encode::encode_png;
use crate::error::LayoutError;
use crate::style::{AlignItems, Direction, FlexWrap, Justify, LayoutStyle};

/// Render lifecycle of a [`LayoutBox`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    /// Accepting children.
    Building,
    /// Canvas is final; further renders return it unchanged.
    Rendered,
}

/// A container that lays out child images like a CSS flexbox.
///
/// The canvas size is taken from the backing image. It only changes when
/// the stacked lines overflow the cross axis and
/// [`allow_resize`](LayoutStyle::allow_resize) is set.
pub struct LayoutBox {
    canvas: RgbaImage,
    width: u32,
    height: u32,
    style: LayoutStyle,
    children: Vec<Child>,
    state: RenderState,
}

impl LayoutBox {
    /// Create a box drawing onto `canvas` with the default style.
    pub fn new(canvas: RgbaImage) -> Self {
        Self::with_style(canvas, LayoutStyle::default())
    }

    /// Create a box drawing onto `canvas`.
    pub fn with_style(canvas: RgbaImage, style: LayoutStyle) -> Self {
        let (width, height) = canvas.dimensions();
        Self {
            canvas,
            width,
            height,
            style,
            children: Vec::new(),
            state: RenderState::Building,
        }
    }

    /// Create a box on a solid `width x height` canvas.
    pub fn blank(width: u32, height: u32, fill: Rgba<u8>) -> Self {
        Self::new(RgbaImage::from_pixel(width, height, fill))
    }

    /// Set padding on all four sides.
    pub fn padding(mut self, padding: u32) -> Self {
        self.style.padding = padding;
        self
    }

    /// Set the gap between items and between lines.
    pub fn gap(mut self, gap: u32) -> Self {
        self.style.gap = gap;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.style.direction = direction;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.style.justify = justify;
        self
    }

    pub fn align_items(mut self, align: AlignItems) -> Self {
        self.style.align_items = align;
        self
    }

    pub fn wrap(mut self, wrap: FlexWrap) -> Self {
        self.style.wrap = wrap;
        self
    }

    /// Allow the canvas to grow when lines overflow the cross axis.
    pub fn allow_resize(mut self, allow: bool) -> Self {
        self.style.allow_resize = allow;
        self
    }

    /// Replace the whole style.
    pub fn style(mut self, style: LayoutStyle) -> Self {
        self.style = style;
        self
    }

    /// Append children in order.
    ///
    /// Fails with [`LayoutError::AlreadyRendered`] once the box has been
    /// rendered, leaving the child list untouched.
    pub fn add_items<I, C>(&mut self, items: I) -> Result<&mut Self, LayoutError>
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        if self.state == RenderState::Rendered {
            return Err(LayoutError::AlreadyRendered);
        }
        self.children.extend(items.into_iter().map(Into::into));
        Ok(self)
    }

    /// Append a single child.
    pub fn add_item(&mut self, item: impl Into<Child>) -> Result<&mut Self, LayoutError> {
        self.add_items(std::iter::once(item))
    }

    /// Lay out and paint the children, returning the finished canvas.
    ///
    /// The first call does the work; later calls return the same image.
    /// A box without children returns its canvas untouched and keeps
    /// accepting children.
    pub fn render(&mut self) -> &RgbaImage {
        if self.state == RenderState::Rendered || self.children.is_empty() {
            return &self.canvas;
        }

        for child in &mut self.children {
            child.flatten();
        }

        let dims: Vec<(u32, u32)> = self.children.iter().map(Child::dimensions).collect();
        let plan = plan::compute(&self.style, self.width, self.height, &dims);
        tracing::debug!(
            "laying out {} items on {} lines ({}x{}, {})",
            dims.len(),
            plan.lines.len(),
            self.width,
            self.height,
            self.style.direction
        );

        if let Some(growth) = plan.growth {
            let edge = match self.style.direction {
                Direction::Row => PaddingEdge::Bottom,
                Direction::Column => PaddingEdge::Right,
            };
            self.canvas = add_padding(&self.canvas, growth.amount, edge);
            (self.width, self.height) = plan.canvas_size(self.width, self.height);
            tracing::debug!(
                "grew canvas by {}px on the {} edge to {}x{}",
                growth.amount,
                edge,
                self.width,
                self.height
            );
        }

        for (child, &(x, y)) in self.children.iter().zip(&plan.positions) {
            tracing::trace!("paste {:?} at ({}, {})", child, x, y);
            imageops::overlay(&mut self.canvas, child.image(), x, y);
        }

        self.state = RenderState::Rendered;
        &self.canvas
    }

    /// Render, then encode the canvas as PNG.
    pub fn rendered_bytes(&mut self) -> Result<Vec<u8>, LayoutError> {
        Ok(encode_png(self.render())?)
    }

    /// Current canvas; only final once [`render`](Self::render) has run.
    pub fn image(&self) -> &RgbaImage {
        &self.canvas
    }

    /// Render and hand over the canvas.
    pub fn into_image(mut self) -> RgbaImage {
        self.render();
        self.canvas
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn layout_style(&self) -> &LayoutStyle {
        &self.style
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn is_rendered(&self) -> bool {
        self.state == RenderState::Rendered
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl std::fmt::Debug for LayoutBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutBox")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("style", &self.style)
            .field("children", &self.children)
            .field("state", &self.state)
            .finish()
    }
}
