//! Declarative scene files.
//!
//! A scene is a JSON tree of boxes whose leaves are image files, solid fills
//! or text. Building a scene yields an unrendered [`LayoutBox`].
//!
//! ```json
//! {
//!   "width": 400, "height": 120, "background": "#202020",
//!   "style": { "padding": 8, "gap": 4, "justify": "space-between", "align_items": "center" },
//!   "children": [
//!     { "image": { "path": "logo.png", "edit": { "fit": { "width": 64, "height": 64 }, "radius": 8 } } },
//!     { "text": { "text": "Hello", "size": 48, "face": "DejaVuSans" } },
//!     { "box": { "width": 100, "height": 100, "children": [] } }
//!   ]
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::edit::{
    self, Anchor, PaddingEdge, TextOptions, TextRenderer, parse_color, position_relative,
};
use crate::error::{EditError, SceneError};
use crate::layout::{Child, LayoutBox};
use crate::style::LayoutStyle;

/// A container and its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    /// CSS color of the initial canvas.
    #[serde(default = "transparent")]
    pub background: String,
    #[serde(default)]
    pub style: LayoutStyle,
    #[serde(default)]
    pub children: Vec<SceneChild>,
    /// Images pinned to canvas edges after layout.
    #[serde(default)]
    pub overlays: Vec<Overlay>,
}

fn transparent() -> String {
    "transparent".to_string()
}

fn white() -> String {
    "white".to_string()
}

fn all_edges() -> String {
    "all".to_string()
}

/// One child of a scene box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneChild {
    Image(ImageSpec),
    Fill(FillSpec),
    Text(TextSpec),
    Box(Scene),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSpec {
    pub path: PathBuf,
    #[serde(default)]
    pub edit: Edits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillSpec {
    pub color: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub edit: Edits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpec {
    pub text: String,
    pub size: u32,
    pub face: String,
    #[serde(default = "white")]
    pub fill: String,
    #[serde(default = "transparent")]
    pub background: String,
    #[serde(default)]
    pub edit: Edits,
}

/// Post-processing applied to a leaf, in field order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Edits {
    pub fit: Option<Fit>,
    pub padding: Option<PaddingSpec>,
    pub border: Option<BorderSpec>,
    pub radius: Option<u32>,
    pub background: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fit {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub mode: FitMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitMode {
    /// Cover the target and crop the overflow.
    #[default]
    Crop,
    /// Fit inside the target with transparent bars.
    Letterbox,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaddingSpec {
    pub amount: u32,
    /// `all`, `left`, `right`, `top`, `bottom`, `x` or `y`.
    #[serde(default = "all_edges")]
    pub edge: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderSpec {
    pub thickness: u32,
    pub color: String,
}

/// An image anchored to edges of the rendered canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    pub image: ImageSpec,
    pub top: Option<i64>,
    pub bottom: Option<i64>,
    pub left: Option<i64>,
    pub right: Option<i64>,
}

/// Loads image files referenced by a scene.
pub trait ImageLoader {
    fn load(&self, path: &Path) -> Result<RgbaImage, EditError>;
}

/// Loads images from disk, resolving relative paths against `root`.
#[derive(Debug, Clone)]
pub struct FsImageLoader {
    root: PathBuf,
}

impl FsImageLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ImageLoader for FsImageLoader {
    fn load(&self, path: &Path) -> Result<RgbaImage, EditError> {
        edit::open_image(self.root.join(path))
    }
}

/// Pre-decoded images keyed by path.
impl ImageLoader for HashMap<PathBuf, RgbaImage> {
    fn load(&self, path: &Path) -> Result<RgbaImage, EditError> {
        self.get(path).cloned().ok_or_else(|| {
            EditError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no image registered for {:?}", path),
            ))
        })
    }
}

/// Collaborators needed to turn a scene into pixels.
pub struct SceneContext<'a> {
    images: &'a dyn ImageLoader,
    text: Option<&'a mut TextRenderer>,
}

impl<'a> SceneContext<'a> {
    pub fn new(images: &'a dyn ImageLoader) -> Self {
        Self { images, text: None }
    }

    /// Enable `text` children.
    pub fn with_text(mut self, renderer: &'a mut TextRenderer) -> Self {
        self.text = Some(renderer);
        self
    }

    fn load(&self, spec: &ImageSpec) -> Result<RgbaImage, SceneError> {
        let img = self.images.load(&spec.path).map_err(|source| SceneError::Image {
            path: spec.path.display().to_string(),
            source,
        })?;
        Ok(spec.edit.apply(img)?)
    }
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let json = std::fs::read_to_string(path).map_err(EditError::from)?;
        Self::from_json(&json)
    }

    /// Build the layout tree without rendering it.
    pub fn build(&self, ctx: &mut SceneContext<'_>) -> Result<LayoutBox, SceneError> {
        let background = parse_color(&self.background)?;
        let mut layout = LayoutBox::blank(self.width, self.height, background).style(self.style);

        for child in &self.children {
            let child = match child {
                SceneChild::Image(spec) => Child::Image(ctx.load(spec)?),
                SceneChild::Fill(spec) => {
                    let color = parse_color(&spec.color)?;
                    let img = RgbaImage::from_pixel(spec.width, spec.height, color);
                    Child::Image(spec.edit.apply(img)?)
                }
                SceneChild::Text(spec) => {
                    let renderer = ctx.text.as_deref_mut().ok_or(SceneError::NoTextRenderer)?;
                    let options = TextOptions::new(spec.size, spec.face.clone())
                        .fill(parse_color(&spec.fill)?)
                        .background(parse_color(&spec.background)?);
                    let img = renderer.render(&spec.text, &options)?;
                    Child::Image(spec.edit.apply(img)?)
                }
                SceneChild::Box(scene) => Child::from(scene.render_box(ctx)?),
            };
            layout.add_item(child)?;
        }

        Ok(layout)
    }

    /// Build and render into a finished image, overlays included.
    pub fn render(&self, ctx: &mut SceneContext<'_>) -> Result<RgbaImage, SceneError> {
        let mut canvas = self.build(ctx)?.into_image();
        for overlay in &self.overlays {
            let img = ctx.load(&overlay.image)?;
            let anchor = Anchor {
                top: overlay.top,
                bottom: overlay.bottom,
                left: overlay.left,
                right: overlay.right,
            };
            canvas = position_relative(canvas, &img, anchor)?;
        }
        Ok(canvas)
    }

    /// Nested boxes with overlays are flattened to an image first.
    fn render_box(&self, ctx: &mut SceneContext<'_>) -> Result<LayoutBox, SceneError> {
        if self.overlays.is_empty() {
            return self.build(ctx);
        }
        let img = self.render(ctx)?;
        Ok(LayoutBox::new(img))
    }
}

impl Edits {
    /// Apply the configured edits to `img`.
    pub fn apply(&self, mut img: RgbaImage) -> Result<RgbaImage, EditError> {
        if let Some(fit) = self.fit {
            img = match fit.mode {
                FitMode::Crop => edit::resize_and_center_crop(&img, fit.width, fit.height),
                FitMode::Letterbox => edit::letterbox(&img, fit.width, fit.height),
            };
        }
        if let Some(padding) = &self.padding {
            let edge: PaddingEdge = padding.edge.parse()?;
            img = edit::add_padding(&img, padding.amount, edge);
        }
        if let Some(border) = &self.border {
            img = edit::add_border(&img, border.thickness, parse_color(&border.color)?);
        }
        if let Some(radius) = self.radius {
            img = edit::add_rounded_corners(img, radius);
        }
        if let Some(background) = &self.background {
            img = edit::change_background_str(&img, background, edit::DEFAULT_BACKGROUND_ALPHA)?;
        }
        Ok(img)
    }
}
