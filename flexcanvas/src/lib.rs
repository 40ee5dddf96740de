//! flexcanvas: flexbox-style composition of raster images.
//!
//! A [`LayoutBox`] owns a canvas and a list of children (images or nested
//! boxes). Rendering breaks the children into lines, distributes free space
//! along the main axis, aligns items on the cross axis and alpha-composites
//! everything onto the canvas, growing it when the lines do not fit.
//!
//! # Usage
//!
//! ```no_run
//! use flexcanvas::{Justify, LayoutBox};
//! use image::{Rgba, RgbaImage};
//!
//! let mut row = LayoutBox::blank(200, 50, Rgba([0, 0, 0, 0]))
//!     .padding(5)
//!     .gap(4)
//!     .justify(Justify::SpaceBetween);
//! row.add_items([
//!     RgbaImage::from_pixel(40, 40, Rgba([255, 0, 0, 255])),
//!     RgbaImage::from_pixel(40, 40, Rgba([0, 0, 255, 255])),
//! ])?;
//! let png = row.rendered_bytes()?;
//! # Ok::<(), flexcanvas::LayoutError>(())
//! ```
//!
//! The [`edit`] module holds standalone transforms (padding, borders, text,
//! rounded corners, fitting) and [`scene`] builds layout trees from JSON.

pub mod edit;
pub mod encode;
pub mod error;
pub mod layout;
pub mod scene;
pub mod style;

pub use encode::encode_png;
pub use error::{EditError, LayoutError, SceneError};
pub use layout::{Child, LayoutBox, LayoutPlan, RenderState};
pub use scene::{FsImageLoader, ImageLoader, Scene, SceneChild, SceneContext};
pub use style::{AlignItems, Direction, FlexWrap, Justify, LayoutStyle};
