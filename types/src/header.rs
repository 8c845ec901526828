//! Header height and offset bookkeeping.

use tracing::{debug, trace};

use crate::scroll::{NestedScrollConnection, ScrollSource};

/// Height and vertical offset of the collapsible header, in px.
///
/// Invariant: `-height_px <= offset_px <= 0`. The header can slide itself
/// completely out of view but never moves below its resting position.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderMetrics {
    height_px: u32,
    offset_px: f32,
    changed: bool,
}

fn clamp_offset(offset_px: f32, height_px: u32) -> f32 {
    if offset_px.is_nan() {
        return 0.0;
    }
    // Adding 0.0 folds -0.0 into 0.0.
    offset_px.clamp(-(height_px as f32), 0.0) + 0.0
}

impl HeaderMetrics {
    /// Builds metrics, clamping `offset_px` into `[-height_px, 0]`.
    #[must_use]
    pub fn new(height_px: u32, offset_px: f32) -> Self {
        Self {
            height_px,
            offset_px: clamp_offset(offset_px, height_px),
            changed: false,
        }
    }

    #[must_use]
    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    #[must_use]
    pub fn offset_px(&self) -> f32 {
        self.offset_px
    }

    /// Adds `delta_px` to the offset and clamps. Returns whether the offset moved.
    pub fn apply_delta(&mut self, delta_px: f32) -> bool {
        if delta_px.is_nan() {
            return false;
        }
        let next = clamp_offset(self.offset_px + delta_px, self.height_px);
        if next == self.offset_px {
            return false;
        }
        trace!(from = self.offset_px, to = next, delta_px, "Header offset moved");
        self.offset_px = next;
        self.changed = true;
        true
    }

    /// Records a newly measured header height.
    ///
    /// The offset is reclamped right away, so a shrinking header never leaves
    /// the offset beyond its own height.
    pub fn set_height(&mut self, height_px: u32) {
        if height_px == self.height_px {
            return;
        }
        debug!(from = self.height_px, to = height_px, "Header height changed");
        self.height_px = height_px;
        self.offset_px = clamp_offset(self.offset_px, height_px);
        self.changed = true;
    }

    /// Leading offset for programmatic jumps: `abs(round(offset_px))`.
    #[must_use]
    pub fn leading_scroll_offset(&self) -> u32 {
        self.offset_px.round().abs() as u32
    }

    /// Part of the header still on screen, in px.
    #[must_use]
    pub fn visible_height_px(&self) -> f32 {
        self.height_px as f32 + self.offset_px
    }

    /// 0.0 when fully expanded, 1.0 when fully collapsed.
    #[must_use]
    pub fn collapse_fraction(&self) -> f32 {
        if self.height_px == 0 {
            return 0.0;
        }
        -self.offset_px / self.height_px as f32
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.offset_px == 0.0
    }

    /// A zero-height header counts as both expanded and collapsed.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.offset_px <= -(self.height_px as f32)
    }

    /// Returns and clears the "height or offset changed" flag.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}

impl NestedScrollConnection for HeaderMetrics {
    fn on_pre_scroll(&mut self, available: f32, _source: ScrollSource) -> f32 {
        self.apply_delta(available);
        // The list still scrolls by the full delta; moving the header is a side effect.
        0.0
    }
}
