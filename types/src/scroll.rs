//! Nested scroll interception.

/// Where a scroll delta came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollSource {
    /// Mouse wheel or trackpad.
    Wheel,
    /// Arrow keys, paging keys.
    Keyboard,
}

/// Receives scroll deltas around the primary scrollable.
///
/// Deltas are in px along the vertical axis. Negative values move content up
/// (towards the end of the list), positive values move it down.
pub trait NestedScrollConnection {
    /// Called before the scrollable consumes `available`. Returns the part of
    /// the delta this connection consumed.
    fn on_pre_scroll(&mut self, available: f32, source: ScrollSource) -> f32 {
        let _ = (available, source);
        0.0
    }

    /// Called after the scrollable consumed `consumed`, with the leftover in
    /// `available`. Returns the part of the leftover this connection consumed.
    fn on_post_scroll(&mut self, consumed: f32, available: f32, source: ScrollSource) -> f32 {
        let _ = (consumed, available, source);
        0.0
    }
}
