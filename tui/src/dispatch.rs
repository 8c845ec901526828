//! Routes scroll deltas through a pre-scroll connection and into the list.

use tracing::trace;

use collapsible_types::{Density, NestedScrollConnection, ScrollSource};

use crate::list::ListState;

/// Sends each delta to a [`NestedScrollConnection`] before the list sees it.
///
/// Deltas are in px; negative values move content up. The list scrolls by
/// whatever the connection left over, and the connection then sees the
/// list's leftovers in `on_post_scroll`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollDispatcher;

impl ScrollDispatcher {
    /// Dispatches through `connection` into `list`. Returns the total px consumed.
    pub fn dispatch_with<C>(
        connection: &mut C,
        list: &ListState,
        density: Density,
        delta_px: f32,
        source: ScrollSource,
    ) -> f32
    where
        C: NestedScrollConnection + ?Sized,
    {
        let pre_consumed = connection.on_pre_scroll(delta_px, source);
        let available = delta_px - pre_consumed;

        let rows = -available / density.px_per_row();
        let list_consumed = density.rows_to_delta_px(-list.scroll_by(rows));

        let post_consumed =
            connection.on_post_scroll(list_consumed, available - list_consumed, source);
        trace!(delta_px, pre_consumed, list_consumed, "Scroll dispatched");
        pre_consumed + list_consumed + post_consumed
    }
}
