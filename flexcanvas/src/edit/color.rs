//! Color parsing.

use image::Rgba;

use crate::error::EditError;

/// Parse a CSS color (`"white"`, `"#ff000080"`, `"rgb(0 128 255)"`, ...)
/// into 8-bit RGBA.
pub fn parse_color(input: &str) -> Result<Rgba<u8>, EditError> {
    let parsed: csscolorparser::Color = input
        .parse()
        .map_err(|_| EditError::InvalidColor(input.to_string()))?;
    Ok(Rgba(parsed.to_rgba8()))
}
