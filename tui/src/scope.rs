//! The header slot's decorator.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use collapsible_types::DEFAULT_ELEVATION;

/// Handed to the scaffold's header callback.
///
/// Only the scaffold constructs one, so [`CollapsibleScope::collapsible`] is
/// only reachable from inside the header slot.
#[derive(Debug)]
pub struct CollapsibleScope {
    _private: (),
}

impl CollapsibleScope {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }

    /// Marks `content` as the collapsible header, `height` rows tall.
    ///
    /// The scaffold measures it, reports the height to the state, shifts it up
    /// by the current offset and draws a shadow under its bottom edge.
    #[must_use]
    pub fn collapsible<W: Widget>(&self, content: W, height: u16) -> Collapsible<W> {
        Collapsible {
            content,
            height,
            elevation: DEFAULT_ELEVATION,
            shadow_style: Style::default().add_modifier(Modifier::DIM),
        }
    }
}

/// A header widget together with its measured height and shadow.
#[derive(Debug)]
pub struct Collapsible<W> {
    pub(crate) content: W,
    pub(crate) height: u16,
    pub(crate) elevation: u16,
    pub(crate) shadow_style: Style,
}

impl<W> Collapsible<W> {
    /// Rows of shadow under the header. Zero disables the shadow.
    #[must_use]
    pub fn elevation(mut self, rows: u16) -> Self {
        self.elevation = rows;
        self
    }

    /// Style patched onto the shadow rows.
    #[must_use]
    pub fn shadow_style(mut self, style: Style) -> Self {
        self.shadow_style = style;
        self
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }
}
