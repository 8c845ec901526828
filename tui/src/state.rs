//! State holder for the collapsible scaffold.

use ratatui::layout::{Position, Rect};
use tracing::warn;

use collapsible_types::{
    Density, HeaderMetrics, NestedScrollConnection, RestoreError, SavedState, SavedStateMap,
    ScrollSource,
};

use crate::dispatch::ScrollDispatcher;
use crate::list::ListState;

/// Header metrics plus the list's scroll handle.
///
/// Created once per screen. Only the two header numbers are saved; the list
/// handle is supplied again on restore because the list owns its position.
#[derive(Debug, Default)]
pub struct CollapsibleState {
    header: HeaderMetrics,
    list: ListState,
    density: Density,
    /// Area of the last render pass.
    viewport: Option<Rect>,
    /// On-screen part of the header in the last render pass.
    header_area: Option<Rect>,
}

impl CollapsibleState {
    /// Builds a state, clamping `header_offset_px` into `[-header_height_px, 0]`.
    #[must_use]
    pub fn new(header_height_px: u32, header_offset_px: f32, list: ListState) -> Self {
        Self::from_metrics(HeaderMetrics::new(header_height_px, header_offset_px), list)
    }

    fn from_metrics(header: HeaderMetrics, list: ListState) -> Self {
        Self {
            header,
            list,
            density: Density::default(),
            viewport: None,
            header_area: None,
        }
    }

    #[must_use]
    pub fn header_height(&self) -> u32 {
        self.header.height_px()
    }

    #[must_use]
    pub fn header_offset(&self) -> f32 {
        self.header.offset_px()
    }

    #[must_use]
    pub fn header(&self) -> &HeaderMetrics {
        &self.header
    }

    #[must_use]
    pub fn list_state(&self) -> &ListState {
        &self.list
    }

    #[must_use]
    pub fn density(&self) -> Density {
        self.density
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.header.is_expanded()
    }

    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.header.is_collapsed()
    }

    #[must_use]
    pub fn collapse_fraction(&self) -> f32 {
        self.header.collapse_fraction()
    }

    /// Records the header's measured height. The offset is reclamped immediately.
    pub fn set_header_height(&mut self, header_height_px: u32) {
        self.header.set_height(header_height_px);
    }

    /// Sends a scroll delta through the header first, then into the list.
    ///
    /// Returns the total px consumed. The header never consumes anything, so
    /// the list sees the full delta.
    pub fn dispatch_scroll(&mut self, delta_px: f32, source: ScrollSource) -> f32 {
        ScrollDispatcher::dispatch_with(
            &mut self.header,
            &self.list,
            self.density,
            delta_px,
            source,
        )
    }

    /// Jumps the list so `index` sits just below the header.
    ///
    /// The leading offset is `abs(round(header_offset))`, read at call time, so a
    /// collapsed header does not leave a gap above the item. The jump is recorded
    /// immediately; the returned future resolves once a render applies it.
    pub fn scroll_to_item(&self, index: usize) -> impl Future<Output = ()> + Send + use<> {
        let leading_rows = self
            .density
            .px_to_rows(self.header.leading_scroll_offset());
        self.list.scroll_to_item(index, u32::from(leading_rows))
    }

    /// Index of the list item under a terminal cell, ignoring cells covered by
    /// the header.
    #[must_use]
    pub fn item_at(&self, column: u16, row: u16) -> Option<usize> {
        if self
            .header_area
            .is_some_and(|area| area.contains(Position::new(column, row)))
        {
            return None;
        }
        self.list.item_at(column, row)
    }

    /// Whether a terminal cell lies inside the last rendered scaffold area.
    /// Before the first render every cell counts as inside.
    #[must_use]
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.viewport
            .is_none_or(|area| area.contains(Position::new(column, row)))
    }

    #[must_use]
    pub fn viewport(&self) -> Option<Rect> {
        self.viewport
    }

    /// Returns and clears the "needs redraw" flag for header and list changes.
    pub fn take_changed(&mut self) -> bool {
        let header = self.header.take_changed();
        let list = self.list.take_changed();
        header || list
    }

    #[must_use]
    pub fn save(&self) -> SavedStateMap {
        SavedState::from(&self.header).to_map()
    }

    pub fn restore(map: &SavedStateMap, list: ListState) -> Result<Self, RestoreError> {
        let saved = SavedState::from_map(map)?;
        Ok(Self::from_metrics(saved.into_metrics(), list))
    }

    /// Restores from `map`, logging and falling back to a default header when
    /// the map is unusable. The list handle is kept either way.
    #[must_use]
    pub fn restore_or_default(map: &SavedStateMap, list: ListState) -> Self {
        remember_collapsible_state(Some(map), 0, 0.0, list)
    }

    pub(crate) fn begin_frame(&mut self, area: Rect, density: Density) {
        self.viewport = Some(area);
        self.density = density;
    }

    pub(crate) fn set_header_area(&mut self, area: Option<Rect>) {
        self.header_area = area;
    }
}

impl NestedScrollConnection for CollapsibleState {
    fn on_pre_scroll(&mut self, available: f32, source: ScrollSource) -> f32 {
        self.header.on_pre_scroll(available, source)
    }
}

/// Saves and restores a value through a flat key-value map.
pub trait StateSaver {
    type Value;

    fn save(&self, value: &Self::Value) -> SavedStateMap;

    /// Returns `None` when the map cannot be restored.
    fn restore(&self, map: &SavedStateMap) -> Option<Self::Value>;
}

/// [`StateSaver`] for [`CollapsibleState`], bound to the list handle that
/// restored states should reuse.
#[derive(Debug, Clone)]
pub struct CollapsibleSaver {
    list: ListState,
}

impl CollapsibleSaver {
    #[must_use]
    pub fn new(list: ListState) -> Self {
        Self { list }
    }
}

impl StateSaver for CollapsibleSaver {
    type Value = CollapsibleState;

    fn save(&self, value: &CollapsibleState) -> SavedStateMap {
        value.save()
    }

    fn restore(&self, map: &SavedStateMap) -> Option<CollapsibleState> {
        match CollapsibleState::restore(map, self.list.clone()) {
            Ok(state) => Some(state),
            Err(err) => {
                warn!("Discarding saved collapsible state: {err}");
                None
            }
        }
    }
}

/// Restores a state from `saved`, or builds one from the initial values.
///
/// Restoration never fails: a missing or malformed map falls back to
/// `header_height_px`/`header_offset_px`. Either way the state uses `list`.
#[must_use]
pub fn remember_collapsible_state(
    saved: Option<&SavedStateMap>,
    header_height_px: u32,
    header_offset_px: f32,
    list: ListState,
) -> CollapsibleState {
    saved
        .and_then(|map| CollapsibleSaver::new(list.clone()).restore(map))
        .unwrap_or_else(|| CollapsibleState::new(header_height_px, header_offset_px, list))
}
