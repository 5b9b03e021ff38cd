//! Per-document state shared between the reader and the outline.
//!
//! The reader owns and mutates it; the outline only reads it while rendering.

use super::identifiers::{Color, NodeId};
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashMap};

/// Bookmark flags keyed by node, valued by the time the bookmark was set.
///
/// Serializes as a JSON object of node id to RFC 3339 timestamp.
pub type Bookmarks = BTreeMap<NodeId, DateTime<Utc>>;

/// Color assignments and bookmark flags for one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SharedState {
    /// Color assigned to each node.
    pub colors: HashMap<NodeId, Color>,
    /// Bookmarked nodes; absence means "not bookmarked".
    pub bookmarks: Bookmarks,
}

impl SharedState {
    /// Empty state: no colors, no bookmarks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Color assigned to `id`, if any.
    pub fn color_of(&self, id: &NodeId) -> Option<&Color> {
        self.colors.get(id)
    }

    /// Whether `id` carries a bookmark.
    pub fn is_bookmarked(&self, id: &NodeId) -> bool {
        self.bookmarks.contains_key(id)
    }

    /// Bookmark `id` at `at`. Re-adding overwrites the timestamp.
    pub fn add_bookmark(&mut self, id: NodeId, at: DateTime<Utc>) {
        self.bookmarks.insert(id, at);
    }

    /// Remove the bookmark on `id`; returns whether one existed.
    pub fn remove_bookmark(&mut self, id: &NodeId) -> bool {
        self.bookmarks.remove(id).is_some()
    }

    /// Serialize the bookmark mapping for the external store.
    pub fn bookmarks_to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.bookmarks)
    }

    /// Parse a bookmark mapping previously produced by [`Self::bookmarks_to_json`].
    pub fn bookmarks_from_json(raw: &str) -> Result<Bookmarks, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
