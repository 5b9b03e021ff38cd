//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod content;
pub mod identifiers;
pub mod shared_state;

// Re-export for convenience
pub use content::{ContentNode, NodeKind};
pub use identifiers::{Color, InvalidColor, InvalidNodeId, NodeId};
pub use shared_state::{Bookmarks, SharedState};
