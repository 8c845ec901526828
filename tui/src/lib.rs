//! Collapsible header scaffold for ratatui.
//!
//! A header that slides out of view as the list below it scrolls forward and
//! slides back in as soon as the user scrolls back, wherever the list is.
//! [`CollapsibleState`] holds the header offset and the list handle;
//! [`CollapsibleScaffold`] draws both.

pub mod demo;
mod dispatch;
mod input;
mod list;
mod scaffold;
mod scope;
mod state;
mod theme;

pub use dispatch::ScrollDispatcher;
pub use input::{
    InputConfig, InputPump, ScrollAction, ScrollIntent, handle_scroll_event, scroll_intent,
};
pub use list::{ListPosition, ListState};
pub use scaffold::{CollapsibleScaffold, ListScope};
pub use scope::{Collapsible, CollapsibleScope};
pub use state::{CollapsibleSaver, CollapsibleState, StateSaver, remember_collapsible_state};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

pub use collapsible_types::{
    DEFAULT_ELEVATION, DEFAULT_LINES_PER_TICK, Density, HeaderMetrics, NestedScrollConnection,
    RestoreError, SavedState, SavedStateMap, ScrollSource, UiOptions,
};
