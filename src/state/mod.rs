//! Reader host layer.
//!
//! Owns the document, the shared per-document state and bookmark persistence,
//! and drives the outline through its lifecycle.

pub mod bookmarks;
pub mod document;
pub mod error;
pub mod reader;
pub mod store;

// Re-export for convenience
pub use bookmarks::{BookmarkError, BookmarkHandle};
pub use document::{Document, DocumentError, NodeSpec};
pub use error::ReaderError;
pub use reader::{Reader, ReaderSettings};
pub use store::{BookmarkStore, FileStore, MemoryStore, StoreError};
