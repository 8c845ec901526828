//! Scroll position handle for the scaffold's list.
//!
//! [`ListState`] is a cheap clonable handle: clones share one position. The
//! scaffold records each render's geometry into it, which lets wheel scrolling
//! clamp against real content and lets programmatic jumps resolve once a
//! render pass has applied them.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use ratatui::layout::{Position, Rect};
use tokio::sync::watch;
use tracing::{debug, trace};

/// First visible item and how far it is scrolled past the list's top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListPosition {
    pub index: usize,
    pub offset: u32,
}

impl ListPosition {
    #[must_use]
    pub const fn new(index: usize, offset: u32) -> Self {
        Self { index, offset }
    }
}

/// Geometry recorded by the last render pass.
#[derive(Debug, Clone, Default)]
struct ListLayout {
    item_heights: Vec<u16>,
    viewport_rows: u16,
    inset_rows: u16,
}

impl ListLayout {
    fn prefix_rows(&self, index: usize) -> u64 {
        self.item_heights[..index.min(self.item_heights.len())]
            .iter()
            .map(|&height| u64::from(height))
            .sum()
    }

    fn max_scroll(&self) -> u64 {
        let content = u64::from(self.inset_rows) + self.prefix_rows(self.item_heights.len());
        content.saturating_sub(u64::from(self.viewport_rows))
    }

    /// Absolute scroll in rows for `position`, with out-of-range indices
    /// pinned to the last item.
    fn absolute(&self, position: ListPosition) -> u64 {
        let index = position
            .index
            .min(self.item_heights.len().saturating_sub(1));
        self.prefix_rows(index) + u64::from(position.offset)
    }

    fn position_at(&self, absolute: u64) -> ListPosition {
        let mut start = 0u64;
        for (index, &height) in self.item_heights.iter().enumerate() {
            let end = start + u64::from(height);
            if absolute < end {
                return ListPosition::new(index, saturating_u32(absolute - start));
            }
            start = end;
        }
        // Past the last item; only reachable when the inset is taller than the viewport.
        let last = self.item_heights.len().saturating_sub(1);
        let start = self.prefix_rows(last);
        ListPosition::new(last, saturating_u32(absolute.saturating_sub(start)))
    }
}

fn saturating_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Copy)]
struct PendingJump {
    ticket: u64,
    target: ListPosition,
}

#[derive(Debug, Default)]
struct ListInner {
    position: ListPosition,
    pending: Option<PendingJump>,
    next_ticket: u64,
    /// Fractional rows carried between `scroll_by` calls.
    remainder: f32,
    layout: Option<ListLayout>,
    visible: Vec<(usize, Rect)>,
    changed: bool,
}

impl ListInner {
    fn take_pending(&mut self) -> Option<u64> {
        let jump = self.pending.take()?;
        if self.position != jump.target {
            self.position = jump.target;
            self.changed = true;
        }
        self.remainder = 0.0;
        Some(jump.ticket)
    }
}

#[derive(Debug)]
struct Shared {
    inner: Mutex<ListInner>,
    /// Highest jump ticket applied so far.
    applied: watch::Sender<u64>,
}

/// Handle to a list's scroll position.
#[derive(Debug, Clone)]
pub struct ListState {
    shared: Arc<Shared>,
}

impl ListState {
    #[must_use]
    pub fn new() -> Self {
        Self::with_position(ListPosition::default())
    }

    #[must_use]
    pub fn with_position(position: ListPosition) -> Self {
        let (applied, _) = watch::channel(0);
        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(ListInner {
                    position,
                    ..ListInner::default()
                }),
                applied,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ListInner> {
        self.shared
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn position(&self) -> ListPosition {
        self.lock().position
    }

    #[must_use]
    pub fn first_visible_index(&self) -> usize {
        self.position().index
    }

    #[must_use]
    pub fn first_visible_offset(&self) -> u32 {
        self.position().offset
    }

    /// Viewport height of the last render pass.
    #[must_use]
    pub fn viewport_rows(&self) -> Option<u16> {
        self.lock().layout.as_ref().map(|layout| layout.viewport_rows)
    }

    #[must_use]
    pub fn is_at_top(&self) -> bool {
        self.lock().position == ListPosition::default()
    }

    #[must_use]
    pub fn has_pending_jump(&self) -> bool {
        self.lock().pending.is_some()
    }

    /// Returns and clears the "position changed" flag.
    pub fn take_changed(&self) -> bool {
        std::mem::take(&mut self.lock().changed)
    }

    /// Scrolls by `rows`; positive values move towards the end of the list.
    ///
    /// Whole rows are applied and the fraction is carried to the next call.
    /// A pending jump is applied first, so the scroll lands relative to it.
    /// Returns the rows actually consumed.
    pub fn scroll_by(&self, rows: f32) -> f32 {
        if !rows.is_finite() || rows == 0.0 {
            return 0.0;
        }

        let mut guard = self.lock();
        let inner = &mut *guard;
        let applied_ticket = inner.take_pending();

        let total = inner.remainder + rows;
        let whole = total.trunc();
        inner.remainder = total - whole;
        let step = whole as i64;

        let consumed = if step == 0 {
            0
        } else if let Some(layout) = inner.layout.as_ref() {
            let current = layout.absolute(inner.position).min(layout.max_scroll());
            let max = layout.max_scroll();
            let target = i64::try_from(current)
                .unwrap_or(i64::MAX)
                .saturating_add(step)
                .clamp(0, i64::try_from(max).unwrap_or(i64::MAX));
            let position = layout.position_at(target as u64);
            let consumed = target - current as i64;
            if consumed != step {
                // Hit an edge; drop the fraction instead of banking it.
                inner.remainder = 0.0;
            }
            if position != inner.position {
                inner.position = position;
                inner.changed = true;
            }
            consumed
        } else {
            // No geometry yet: move within the current item, the next layout clamps.
            let offset = i64::from(inner.position.offset).saturating_add(step).max(0);
            let consumed = offset - i64::from(inner.position.offset);
            inner.position.offset = saturating_u32(offset as u64);
            inner.changed |= consumed != 0;
            consumed
        };
        drop(guard);

        if let Some(ticket) = applied_ticket {
            self.publish_applied(ticket);
        }
        trace!(rows, consumed, "List scrolled");
        consumed as f32
    }

    /// Requests a jump so `index` becomes the first visible item, scrolled
    /// `offset` rows past the top edge.
    ///
    /// The request is recorded immediately; the returned future resolves once
    /// a render pass (or a later scroll) has applied it. Later requests and
    /// user scrolls win over earlier ones.
    pub fn scroll_to_item(
        &self,
        index: usize,
        offset: u32,
    ) -> impl Future<Output = ()> + Send + use<> {
        let ticket = {
            let mut inner = self.lock();
            inner.next_ticket += 1;
            let ticket = inner.next_ticket;
            inner.pending = Some(PendingJump {
                ticket,
                target: ListPosition::new(index, offset),
            });
            inner.changed = true;
            ticket
        };
        debug!(index, offset, ticket, "List jump requested");

        let mut applied = self.shared.applied.subscribe();
        async move {
            loop {
                let current = *applied.borrow_and_update();
                if current >= ticket {
                    break;
                }
                if applied.changed().await.is_err() {
                    break;
                }
            }
        }
    }

    /// Records the geometry of a render pass, applies any pending jump and
    /// clamps the position. Returns the position to draw.
    pub(crate) fn apply_layout(
        &self,
        item_heights: Vec<u16>,
        viewport_rows: u16,
        inset_rows: u16,
    ) -> ListPosition {
        let layout = ListLayout {
            item_heights,
            viewport_rows,
            inset_rows,
        };

        let mut inner = self.lock();
        let applied_ticket = inner.take_pending();
        let absolute = layout.absolute(inner.position).min(layout.max_scroll());
        let position = layout.position_at(absolute);
        if position != inner.position {
            inner.position = position;
            inner.changed = true;
        }
        inner.layout = Some(layout);
        drop(inner);

        if let Some(ticket) = applied_ticket {
            debug!(ticket, index = position.index, offset = position.offset, "List jump applied");
            self.publish_applied(ticket);
        }
        position
    }

    /// Raises the applied ticket. Never moves it backwards.
    fn publish_applied(&self, ticket: u64) {
        self.shared.applied.send_if_modified(|current| {
            let newer = ticket > *current;
            if newer {
                *current = ticket;
            }
            newer
        });
    }

    pub(crate) fn record_visible(&self, visible: Vec<(usize, Rect)>) {
        self.lock().visible = visible;
    }

    /// Index of the item drawn under a terminal cell in the last render pass.
    #[must_use]
    pub fn item_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.lock()
            .visible
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(index, _)| *index)
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}
