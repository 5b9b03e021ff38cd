//! Error types for the reader.
//!
//! Each layer owns its error enum; [`ReaderError`] is the top-level type the
//! reader returns, composing them via `From` so `?` works across layers.
//!
//! # Error Hierarchy
//!
//! - [`ReaderError`]
//!   - [`DocumentError`] - unknown or duplicate content node ids
//!   - [`OutlineError`] - render contract violations (bad viewport, no nodes)
//!   - [`BookmarkError`] - corrupt stored bookmarks, store failures
//!   - [`UnknownPaletteError`] - color requested from an unregistered palette
//!
//! The one deliberate non-error is content that fits in the viewport: the
//! outline is simply empty.

use super::bookmarks::BookmarkError;
use super::document::DocumentError;
use crate::palette::UnknownPaletteError;
use crate::view_state::OutlineError;
use thiserror::Error;

/// Top-level reader error.
#[derive(Debug, Error)]
pub enum ReaderError {
    /// A node id did not resolve against the document.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Rendering the outline failed.
    #[error("Outline render failed: {0}")]
    Outline(#[from] OutlineError),

    /// Restoring or persisting bookmarks failed.
    #[error(transparent)]
    Bookmark(#[from] BookmarkError),

    /// Color allocation failed.
    #[error(transparent)]
    Palette(#[from] UnknownPaletteError),
}
