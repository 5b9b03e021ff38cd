//! Section color allocation.
//!
//! - `set`: PaletteSet - immutable, ordered palette configuration
//! - `allocator`: ColorAllocator - round-robin dispenser over a PaletteSet

pub mod allocator;
pub mod set;

pub use allocator::{ColorAllocator, UnknownPaletteError};
pub use set::{PaletteConfigError, PaletteSet};
