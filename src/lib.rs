//! docmap
//!
//! Document minimap outline with round-robin section coloring.
//!
//! The crate is split into a pure core and a thin host layer:
//!
//! - [`palette`]: named palettes and the round-robin [`palette::ColorAllocator`]
//! - [`view_state`]: the proportional [`view_state::Outline`] and its drag state
//! - [`model`]: identifiers, content nodes and per-document shared state
//! - [`state`]: the [`state::Reader`] host, document model and bookmark storage
//! - [`config`] and [`logging`]: file-based settings and tracing setup

pub mod config;
pub mod logging;
pub mod model;
pub mod palette;
pub mod state;
pub mod view_state;
