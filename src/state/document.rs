//! Headless document model: ordered content nodes with live pixel heights.

use crate::model::{ContentNode, NodeId, NodeKind};
use crate::view_state::height_index::HeightIndex;
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised by document construction and node lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// Two nodes share the same id.
    #[error("Duplicate content node id: {0}")]
    DuplicateNode(NodeId),

    /// A node id is not part of this document.
    #[error("Unknown content node: {0}")]
    UnknownNode(NodeId),
}

/// Static description of one content node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSpec {
    /// Node identity.
    pub id: NodeId,
    /// Section role.
    pub kind: NodeKind,
    /// Initial outer height in whole pixels.
    pub height: usize,
}

impl NodeSpec {
    /// Describe a node with its initial height.
    pub fn new(id: NodeId, kind: NodeKind, height: usize) -> Self {
        Self { id, kind, height }
    }
}

/// A titled document: content nodes in order plus their current heights.
#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    ids: Vec<NodeId>,
    kinds: Vec<NodeKind>,
    positions: HashMap<NodeId, usize>,
    heights: HeightIndex,
}

impl Document {
    /// Build a document from nodes in document order.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::DuplicateNode`] if an id repeats.
    pub fn new(
        title: impl Into<String>,
        nodes: impl IntoIterator<Item = NodeSpec>,
    ) -> Result<Self, DocumentError> {
        let mut ids = Vec::new();
        let mut kinds = Vec::new();
        let mut heights = Vec::new();
        let mut positions = HashMap::new();

        for (position, spec) in nodes.into_iter().enumerate() {
            if positions.insert(spec.id.clone(), position).is_some() {
                return Err(DocumentError::DuplicateNode(spec.id));
            }
            ids.push(spec.id);
            kinds.push(spec.kind);
            heights.push(spec.height);
        }

        Ok(Self {
            title: title.into(),
            ids,
            kinds,
            positions,
            heights: HeightIndex::from_heights(heights),
        })
    }

    /// Title used as the bookmark store key.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of content nodes.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the document has no nodes.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether `id` is part of this document.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.positions.contains_key(id)
    }

    /// Node ids and kinds in document order.
    pub fn nodes(&self) -> impl Iterator<Item = (&NodeId, NodeKind)> {
        self.ids.iter().zip(self.kinds.iter().copied())
    }

    /// Descriptors for the outline, in document order.
    pub fn content_nodes(&self) -> Vec<ContentNode> {
        self.ids
            .iter()
            .enumerate()
            .map(|(i, id)| ContentNode::new(id.clone(), self.heights.height(i) as f64))
            .collect()
    }

    /// Total content height in pixels.
    pub fn content_height(&self) -> usize {
        self.heights.total()
    }

    /// Current height of `id`.
    pub fn height_of(&self, id: &NodeId) -> Result<usize, DocumentError> {
        let position = self.position(id)?;
        Ok(self.heights.height(position))
    }

    /// Document-space top offset of `id`.
    pub fn offset_of(&self, id: &NodeId) -> Result<usize, DocumentError> {
        let position = self.position(id)?;
        Ok(self.heights.offset_of(position))
    }

    /// Change the height of `id` (content growth or shrink).
    ///
    /// Returns the previous height.
    pub fn set_height(&mut self, id: &NodeId, height: usize) -> Result<usize, DocumentError> {
        let position = self.position(id)?;
        let previous = self.heights.height(position);
        self.heights.set(position, height);
        Ok(previous)
    }

    /// Node containing the document offset `y`, if any.
    pub fn node_at(&self, y: usize) -> Option<&NodeId> {
        self.heights.lower_bound(y).map(|i| &self.ids[i])
    }

    fn position(&self, id: &NodeId) -> Result<usize, DocumentError> {
        self.positions
            .get(id)
            .copied()
            .ok_or_else(|| DocumentError::UnknownNode(id.clone()))
    }
}
