//! Text rasterization.
//!
//! Glyphs are shaped and rasterized with cosmic-text. Fonts never come from an
//! implicit system lookup: a [`TextRenderer`] only knows the faces its
//! [`FontSource`] hands it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache, fontdb};
use image::{Pixel, Rgba, RgbaImage};

use crate::error::EditError;

/// Font size as a fraction of the square canvas side.
const FONT_SCALE: f32 = 0.9;

/// Supplies raw font files by face name.
pub trait FontSource {
    /// Return the TrueType/OpenType bytes for `face`.
    fn font_data(&self, face: &str) -> Result<Vec<u8>, EditError>;
}

/// Looks up faces as files in a list of directories.
///
/// A face name with an extension (`"DejaVuSans.ttf"`) must match a file
/// exactly; a bare name also tries `.ttf` and `.otf`.
#[derive(Debug, Clone, Default)]
pub struct FontDirectory {
    dirs: Vec<PathBuf>,
}

impl FontDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dirs: vec![dir.into()] }
    }

    /// Add another directory, searched after the existing ones.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dirs.push(dir.into());
        self
    }

    fn candidates(&self, face: &str) -> Vec<PathBuf> {
        let has_ext = Path::new(face).extension().is_some();
        let mut out = Vec::new();
        for dir in &self.dirs {
            out.push(dir.join(face));
            if !has_ext {
                out.push(dir.join(format!("{}.ttf", face)));
                out.push(dir.join(format!("{}.otf", face)));
            }
        }
        out
    }
}

impl FontSource for FontDirectory {
    fn font_data(&self, face: &str) -> Result<Vec<u8>, EditError> {
        for path in self.candidates(face) {
            if path.is_file() {
                tracing::debug!("Loading font {:?} from {:?}", face, path);
                return Ok(std::fs::read(&path)?);
            }
        }
        Err(EditError::FontNotFound(face.to_string()))
    }
}

/// Faces held in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemoryFonts {
    fonts: HashMap<String, Vec<u8>>,
}

impl MemoryFonts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, face: impl Into<String>, data: Vec<u8>) -> &mut Self {
        self.fonts.insert(face.into(), data);
        self
    }
}

impl FontSource for MemoryFonts {
    fn font_data(&self, face: &str) -> Result<Vec<u8>, EditError> {
        self.fonts
            .get(face)
            .cloned()
            .ok_or_else(|| EditError::FontNotFound(face.to_string()))
    }
}

/// How to draw a piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOptions {
    /// Side of the square canvas in pixels.
    pub size: u32,
    /// Face name passed to the [`FontSource`].
    pub face: String,
    pub fill: Rgba<u8>,
    pub background: Rgba<u8>,
}

impl TextOptions {
    /// White text on a transparent `size x size` canvas.
    pub fn new(size: u32, face: impl Into<String>) -> Self {
        Self {
            size,
            face: face.into(),
            fill: Rgba([255, 255, 255, 255]),
            background: Rgba([0, 0, 0, 0]),
        }
    }

    pub fn fill(mut self, fill: Rgba<u8>) -> Self {
        self.fill = fill;
        self
    }

    pub fn background(mut self, background: Rgba<u8>) -> Self {
        self.background = background;
        self
    }
}

/// Pixel bounds of the drawn glyphs, relative to the text origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InkBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl InkBounds {
    pub fn width(&self) -> i64 {
        (self.right - self.left) as i64
    }

    pub fn height(&self) -> i64 {
        (self.bottom - self.top) as i64
    }

    fn include(bounds: &mut Option<InkBounds>, x: i32, y: i32, w: u32, h: u32) {
        let (r, b) = (x + w as i32, y + h as i32);
        *bounds = Some(match *bounds {
            None => InkBounds { left: x, top: y, right: r, bottom: b },
            Some(ink) => InkBounds {
                left: ink.left.min(x),
                top: ink.top.min(y),
                right: ink.right.max(r),
                bottom: ink.bottom.max(b),
            },
        });
    }
}

/// Canvas width for text of `ink_width` on a `size` square: the square
/// widens when the text does not fit.
pub fn text_canvas_width(size: u32, ink_width: i64) -> u32 {
    if ink_width > size as i64 { ink_width as u32 } else { size }
}

/// Text origin that centers `ink` on a `width x height` canvas.
///
/// The origin sits a twentieth of the height left of true center and a
/// quarter of the ink height above it.
pub fn text_origin(width: u32, height: u32, ink: &InkBounds) -> (i64, i64) {
    let (w, h) = (width as i64, height as i64);
    let x = (w - ink.width()).div_euclid(2) - h.div_euclid(20);
    let y = (h - ink.height()).div_euclid(2) - ink.height().div_euclid(4);
    (x, y)
}

/// Renders strings onto transparent canvases.
pub struct TextRenderer {
    source: Box<dyn FontSource>,
    font_system: FontSystem,
    swash_cache: SwashCache,
    /// Face name -> family name registered in the font database.
    families: HashMap<String, String>,
}

impl TextRenderer {
    /// Create a renderer whose font database starts empty.
    pub fn new(source: impl FontSource + 'static) -> Self {
        let font_system = FontSystem::new_with_locale_and_db("en-US".to_string(), fontdb::Database::new());
        Self {
            source: Box::new(source),
            font_system,
            swash_cache: SwashCache::new(),
            families: HashMap::new(),
        }
    }

    /// Load `face` into the font database if needed and return its family name.
    fn family_for(&mut self, face: &str) -> Result<String, EditError> {
        if let Some(family) = self.families.get(face) {
            return Ok(family.clone());
        }

        let data = self.source.font_data(face)?;
        let db = self.font_system.db_mut();
        let ids = db.load_font_source(fontdb::Source::Binary(Arc::new(data)));
        let family = ids
            .iter()
            .filter_map(|id| db.face(*id))
            .find_map(|info| info.families.first().map(|(name, _)| name.clone()))
            .ok_or_else(|| EditError::InvalidFont(face.to_string()))?;

        tracing::debug!("Registered font {:?} as family {:?}", face, family);
        self.families.insert(face.to_string(), family.clone());
        Ok(family)
    }

    /// Shape `text` at `font_size` pixels.
    fn shape(&mut self, text: &str, family: &str, font_size: f32) -> Buffer {
        let metrics = Metrics::new(font_size, font_size * 1.2);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, None, None);
        let attrs = Attrs::new().family(Family::Name(family));
        buffer.set_text(&mut self.font_system, text, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
    }

    /// Draw `text` centered on a `size x size` canvas (wider if needed).
    pub fn render(&mut self, text: &str, options: &TextOptions) -> Result<RgbaImage, EditError> {
        let family = self.family_for(&options.face)?;
        let buffer = self.shape(text, &family, options.size as f32 * FONT_SCALE);

        let mut ink = None;
        let mut coverage: Vec<(i32, i32, u32, u32, u8)> = Vec::new();
        buffer.draw(
            &mut self.font_system,
            &mut self.swash_cache,
            cosmic_text::Color::rgba(options.fill[0], options.fill[1], options.fill[2], options.fill[3]),
            |x, y, w, h, color| {
                if color.a() > 0 {
                    InkBounds::include(&mut ink, x, y, w, h);
                    coverage.push((x, y, w, h, color.a()));
                }
            },
        );

        let height = options.size;
        let Some(ink) = ink else {
            return Ok(RgbaImage::from_pixel(options.size, height, options.background));
        };

        let width = text_canvas_width(options.size, ink.width());
        let mut canvas = RgbaImage::from_pixel(width, height, options.background);
        let (ox, oy) = text_origin(width, height, &ink);

        for (x, y, w, h, alpha) in coverage {
            let px = Rgba([options.fill[0], options.fill[1], options.fill[2], alpha]);
            for dy in 0..h as i64 {
                for dx in 0..w as i64 {
                    let cx = ox + x as i64 + dx;
                    let cy = oy + y as i64 + dy;
                    if cx >= 0 && cy >= 0 && cx < width as i64 && cy < height as i64 {
                        canvas.get_pixel_mut(cx as u32, cy as u32).blend(&px);
                    }
                }
            }
        }

        tracing::trace!("rendered {:?} on {}x{} canvas", text, width, height);
        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_centers_ink() {
        let ink = InkBounds { left: 0, top: 0, right: 40, bottom: 20 };
        // (100 - 40) / 2 - 100 / 20 = 25; (100 - 20) / 2 - 20 / 4 = 35.
        assert_eq!(text_origin(100, 100, &ink), (25, 35));
    }

    #[test]
    fn test_canvas_widens_for_long_text() {
        assert_eq!(text_canvas_width(50, 30), 50);
        assert_eq!(text_canvas_width(50, 50), 50);
        assert_eq!(text_canvas_width(50, 73), 73);
    }

    #[test]
    fn test_ink_bounds_union() {
        let mut ink = None;
        InkBounds::include(&mut ink, 3, 4, 1, 1);
        InkBounds::include(&mut ink, -2, 9, 2, 3);
        let ink = ink.unwrap();
        assert_eq!(ink, InkBounds { left: -2, top: 4, right: 4, bottom: 12 });
        assert_eq!((ink.width(), ink.height()), (6, 8));
    }

    /// A DejaVu Sans from the usual system locations, if installed.
    fn system_fonts() -> Option<FontDirectory> {
        let fonts = [
            "/usr/share/fonts/truetype/dejavu",
            "/usr/share/fonts/dejavu",
            "/usr/share/fonts/TTF",
            "/usr/share/fonts/dejavu-sans-fonts",
            "/usr/local/share/fonts",
            "/Library/Fonts",
        ]
        .into_iter()
        .fold(FontDirectory::default(), |f, d| f.with_dir(d));
        fonts.font_data("DejaVuSans").ok().map(|_| fonts)
    }

    #[test]
    fn test_render_draws_centered_glyph() {
        let Some(fonts) = system_fonts() else {
            eprintln!("DejaVuSans not installed, skipping");
            return;
        };
        let red = Rgba([255, 0, 0, 255]);
        let mut renderer = TextRenderer::new(fonts);
        let options = TextOptions::new(40, "DejaVuSans").fill(red);

        let img = renderer.render("A", &options).unwrap();
        assert_eq!(img.dimensions(), (40, 40));
        let inked: Vec<(u32, u32)> = img
            .enumerate_pixels()
            .filter(|(_, _, p)| p[3] > 0)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!inked.is_empty());
        assert!(img.pixels().any(|p| *p == red));
        // Ink sits away from the canvas edges.
        assert!(inked.iter().all(|&(x, _)| x > 0 && x < 39));
        assert_eq!(img.get_pixel(0, 0)[3], 0);

        // Cached family; long text widens the canvas but keeps its height.
        let wide = renderer.render("flexbox layout", &options).unwrap();
        assert!(wide.width() > 40);
        assert_eq!(wide.height(), 40);
    }

    #[test]
    fn test_missing_face_is_reported() {
        let mut renderer = TextRenderer::new(MemoryFonts::new());
        let err = renderer.render("hi", &TextOptions::new(32, "Nowhere")).unwrap_err();
        assert!(matches!(err, EditError::FontNotFound(ref f) if f == "Nowhere"));
    }

    #[test]
    fn test_garbage_font_data_is_invalid() {
        let mut fonts = MemoryFonts::new();
        fonts.insert("Broken", b"definitely not a font".to_vec());
        let mut renderer = TextRenderer::new(fonts);
        let err = renderer.render("hi", &TextOptions::new(32, "Broken")).unwrap_err();
        assert!(matches!(err, EditError::InvalidFont(_)));
    }

    #[test]
    fn test_font_directory_resolves_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Plain.ttf"), b"ttf-bytes").unwrap();
        std::fs::write(dir.path().join("Other.otf"), b"otf-bytes").unwrap();

        let fonts = FontDirectory::new(dir.path());
        assert_eq!(fonts.font_data("Plain").unwrap(), b"ttf-bytes");
        assert_eq!(fonts.font_data("Plain.ttf").unwrap(), b"ttf-bytes");
        assert_eq!(fonts.font_data("Other").unwrap(), b"otf-bytes");
        assert!(matches!(fonts.font_data("Missing"), Err(EditError::FontNotFound(_))));
    }

    #[test]
    fn test_font_directory_search_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::write(second.path().join("Face.ttf"), b"second").unwrap();

        let fonts = FontDirectory::new(first.path()).with_dir(second.path());
        assert_eq!(fonts.font_data("Face").unwrap(), b"second");

        std::fs::write(first.path().join("Face.ttf"), b"first").unwrap();
        assert_eq!(fonts.font_data("Face").unwrap(), b"first");
    }
}
