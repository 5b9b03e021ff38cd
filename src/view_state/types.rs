//! Core view-state newtypes for the two coordinate spaces.
//!
//! Document space is the full scrollable document in pixels. Outline space is
//! the compressed minimap, also in pixels. [`ScaleFactor`] converts between them.

/// Ratio of full content height to viewport height.
///
/// Always finite and > 0. A factor <= 1 means the content fits in the
/// viewport and no outline is drawn.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScaleFactor(f64);

/// Error returned when a scale factor would be zero, negative or non-finite.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("Scale factor must be finite and > 0 (content {content_height}, viewport {viewport_height})")]
pub struct InvalidScaleFactor {
    /// Content height the factor was computed from.
    pub content_height: f64,
    /// Viewport height the factor was computed from.
    pub viewport_height: f64,
}

impl ScaleFactor {
    /// Smart constructor: `content_height / viewport_height`.
    pub fn new(content_height: f64, viewport_height: f64) -> Result<Self, InvalidScaleFactor> {
        let factor = content_height / viewport_height;
        if factor.is_finite() && factor > 0.0 {
            Ok(Self(factor))
        } else {
            Err(InvalidScaleFactor {
                content_height,
                viewport_height,
            })
        }
    }

    /// Get the raw ratio.
    pub fn get(&self) -> f64 {
        self.0
    }

    /// Map a document-space length or offset into outline space.
    pub fn to_outline(&self, document_px: f64) -> f64 {
        document_px / self.0
    }

    /// Map an outline-space length or offset into document space.
    pub fn to_document(&self, outline_px: f64) -> f64 {
        outline_px * self.0
    }
}

/// Viewport measurements taken by the host at the moment of a call.
///
/// All values are document-space pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurements {
    /// Current vertical scroll offset of the document.
    pub scroll_top: f64,
    /// Height of the visible window.
    pub viewport_height: f64,
    /// Total height of the scrollable content.
    pub content_height: f64,
}

impl Measurements {
    /// Bundle one set of measurements.
    pub fn new(scroll_top: f64, viewport_height: f64, content_height: f64) -> Self {
        Self {
            scroll_top,
            viewport_height,
            content_height,
        }
    }

    /// Largest scroll offset the document accepts.
    pub fn max_scroll_top(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }
}
