//! Core domain types for the collapsible scaffold.
//!
//! This crate contains pure domain types with no IO, no async, and no ratatui
//! dependency. The header offset arithmetic, the nested-scroll seam and the
//! saved-state codec live here so every layer can use them.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod density;
mod header;
mod options;
mod saved;
mod scroll;

pub use density::Density;
pub use header::HeaderMetrics;
pub use options::{DEFAULT_ELEVATION, DEFAULT_LINES_PER_TICK, UiOptions};
pub use saved::{HEADER_HEIGHT_KEY, HEADER_OFFSET_KEY, RestoreError, SavedState, SavedStateMap};
pub use scroll::{NestedScrollConnection, ScrollSource};
