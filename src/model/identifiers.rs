//! Core identifier newtypes with smart constructors.
//!
//! Both identifiers validate non-empty strings at construction time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one content node (section) in a document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId(String);

impl NodeId {
    /// Smart constructor: validates non-empty node id
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidNodeId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidNodeId::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for NodeId {
    type Error = InvalidNodeId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// A color value as the host understands it (e.g. `"#687E00"`, `"white"`).
///
/// The crate never interprets the value; it only hands it back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Smart constructor: validates non-empty color value
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidColor> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidColor::Empty);
        }
        Ok(Self(raw))
    }

    /// Build a color from a crate-internal literal known to be non-empty.
    pub(crate) fn from_literal(raw: &'static str) -> Self {
        debug_assert!(!raw.trim().is_empty());
        Self(raw.to_string())
    }

    /// Borrow the raw color value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = InvalidColor;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

// ===== Error Types =====

/// Error returned by [`NodeId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidNodeId {
    /// The id was empty.
    #[error("Node ID cannot be empty")]
    Empty,
}

/// Error returned by [`Color::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidColor {
    /// The value was empty or whitespace.
    #[error("Color value cannot be empty")]
    Empty,
}

// ===== Tests =====
