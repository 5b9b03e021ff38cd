//! Content node descriptors handed to the outline by the host.

use super::identifiers::NodeId;

/// Role a node plays in the document's section structure.
///
/// Only section starts (level-2 headings, publication info) draw a fresh
/// color; body nodes inherit the color of the section they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeKind {
    /// Opens a new colored section.
    SectionStart,
    /// Ordinary content inside the current section.
    #[default]
    Body,
}

impl NodeKind {
    /// Whether this node opens a new section.
    pub fn starts_section(&self) -> bool {
        matches!(self, Self::SectionStart)
    }
}

/// One addressable section of the full document as seen by the outline.
///
/// Document order is the order of the slice the host passes to
/// [`Outline::render`](crate::view_state::outline::Outline::render).
#[derive(Debug, Clone, PartialEq)]
pub struct ContentNode {
    /// Node identity, used to look up color and bookmark state.
    pub id: NodeId,
    /// Real pixel height in the full document, margins included.
    pub outer_height: f64,
}

impl ContentNode {
    /// Create a node descriptor.
    pub fn new(id: NodeId, outer_height: f64) -> Self {
        Self { id, outer_height }
    }
}
