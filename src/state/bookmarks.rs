//! Bookmark restore/persist and the per-section bookmark line.

use super::document::Document;
use super::store::{BookmarkStore, StoreError};
use crate::model::{Bookmarks, Color, NodeId, SharedState};
use thiserror::Error;
use tracing::{info, warn};

/// Icon color used for bookmarked sections.
pub const BOOKMARKED_ICON_COLOR: &str = "white";

/// Errors raised while restoring or persisting bookmarks.
#[derive(Debug, Error)]
pub enum BookmarkError {
    /// The stored mapping for `title` is not valid bookmark JSON.
    #[error("Stored bookmarks for '{title}' are corrupt: {source}")]
    Corrupt {
        /// Document title used as store key.
        title: String,
        /// Parse error details.
        #[source]
        source: serde_json::Error,
    },

    /// The bookmark mapping could not be serialized.
    #[error("Failed to serialize bookmarks: {0}")]
    Encode(#[source] serde_json::Error),

    /// The backing store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Load bookmarks stored under the document title.
///
/// Ids that are no longer part of the document are dropped with a warning.
pub fn restore<S: BookmarkStore>(store: &S, document: &Document) -> Result<Bookmarks, BookmarkError> {
    let Some(raw) = store.get(document.title())? else {
        return Ok(Bookmarks::new());
    };

    let mut bookmarks =
        SharedState::bookmarks_from_json(&raw).map_err(|source| BookmarkError::Corrupt {
            title: document.title().to_string(),
            source,
        })?;

    bookmarks.retain(|id, _| {
        let known = document.contains(id);
        if !known {
            warn!(node = %id, title = document.title(), "Dropping bookmark for unknown node");
        }
        known
    });

    info!(
        title = document.title(),
        count = bookmarks.len(),
        "Bookmarks restored"
    );
    Ok(bookmarks)
}

/// Write the current bookmark mapping under `title`.
pub fn persist<S: BookmarkStore>(
    store: &mut S,
    title: &str,
    state: &SharedState,
) -> Result<(), BookmarkError> {
    let json = state.bookmarks_to_json().map_err(BookmarkError::Encode)?;
    store.set(title, json)?;
    info!(title, count = state.bookmarks.len(), "Bookmarks stored");
    Ok(())
}

/// Clickable bookmark affordance for one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkHandle {
    /// Section the handle belongs to.
    pub node_id: NodeId,
    /// Color of the section stripe.
    pub stripe_color: Option<Color>,
    /// Color of the bookmark icon: white when set, the section color otherwise.
    pub icon_color: Option<Color>,
    /// Whether the section is bookmarked.
    pub bookmarked: bool,
}

/// Build one handle per node in document order.
pub fn bookmark_line(document: &Document, state: &SharedState) -> Vec<BookmarkHandle> {
    document
        .nodes()
        .map(|(id, _)| {
            let stripe_color = state.color_of(id).cloned();
            let bookmarked = state.is_bookmarked(id);
            let icon_color = if bookmarked {
                Some(Color::from_literal(BOOKMARKED_ICON_COLOR))
            } else {
                stripe_color.clone()
            };
            BookmarkHandle {
                node_id: id.clone(),
                stripe_color,
                icon_color,
                bookmarked,
            }
        })
        .collect()
}
