//! Single-purpose image transforms.
//!
//! None of these know about layout. They prepare images before they go into a
//! [`LayoutBox`](crate::LayoutBox) or post-process a rendered canvas.

pub mod background;
pub mod border;
pub mod color;
pub mod corners;
pub mod fit;
pub mod load;
pub mod padding;
pub mod position;
pub mod text;

pub use background::{DEFAULT_BACKGROUND_ALPHA, change_background, change_background_str};
pub use border::add_border;
pub use color::parse_color;
pub use corners::add_rounded_corners;
pub use fit::{letterbox, letterbox_png, resize_and_center_crop};
pub use load::{load_image, open_image};
pub use padding::{PaddingEdge, PaddingFill, add_padding, add_padding_with_fill};
pub use position::{Anchor, position_relative};
pub use text::{FontDirectory, FontSource, InkBounds, MemoryFonts, TextOptions, TextRenderer};
