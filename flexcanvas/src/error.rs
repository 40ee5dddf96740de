//! Error types for layout, image editing and scene loading.

use thiserror::Error;

/// Errors raised by [`LayoutBox`](crate::LayoutBox) and the style parsers.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("cannot add items after rendering")]
    AlreadyRendered,

    #[error("invalid {kind} value: {value:?}")]
    InvalidValue { kind: &'static str, value: String },

    #[error("encode error: {0}")]
    Encode(#[from] image::ImageError),
}

impl LayoutError {
    pub(crate) fn invalid(kind: &'static str, value: &str) -> Self {
        LayoutError::InvalidValue {
            kind,
            value: value.to_string(),
        }
    }
}

/// Errors raised by the image-editing helpers.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("invalid {kind} keyword: {value:?}")]
    InvalidKeyword { kind: &'static str, value: String },

    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    #[error("cannot set both {0} and {1}")]
    ConflictingAnchor(&'static str, &'static str),

    #[error("font not found: {0}")]
    FontNotFound(String),

    #[error("font data for {0:?} contains no usable faces")]
    InvalidFont(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Errors raised while turning a scene description into a layout tree.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("scene parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to load image {path}: {source}")]
    Image {
        path: String,
        #[source]
        source: EditError,
    },

    #[error("scene contains text but no text renderer was supplied")]
    NoTextRenderer,

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}
