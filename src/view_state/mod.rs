//! View-state layer - outline layout, indicator and drag handling
//!
//! Pure computation over host-supplied measurements. Nothing in this layer
//! performs I/O or owns document content.
//!
//! # Module Structure
//!
//! - `types`: Core newtypes (ScaleFactor, Measurements)
//! - `layout_params`: OutlineParams - gap and indicator floor
//! - `outline`: Outline - layout, visible-area indicator, pointer entry points
//! - `drag`: DragState - pointer drag state machine and scroll commands
//! - `height_index`: HeightIndex - O(log n) prefix sums via Fenwick tree

pub mod drag;
pub mod height_index;
pub mod layout_params;
pub mod outline;
pub mod types;

pub use drag::{DragState, PointerOutcome, PointerSource, ScrollCommand};
pub use layout_params::OutlineParams;
pub use outline::{Outline, OutlineError, OutlineNode, VisibleArea};
pub use types::{Measurements, ScaleFactor};
