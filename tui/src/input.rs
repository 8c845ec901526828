//! Terminal input: a background event pump and scroll key/wheel mapping.

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use collapsible_types::{DEFAULT_LINES_PER_TICK, ScrollSource};

use crate::state::CollapsibleState;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads crossterm events on a blocking thread and hands them to the UI loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    /// Starts the reader thread. Must be called inside a tokio runtime.
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    /// Takes up to one frame's worth of queued events without waiting.
    pub fn drain(&mut self) -> Result<Vec<Event>> {
        let mut events = Vec::new();
        while events.len() < MAX_EVENTS_PER_FRAME {
            match self.rx.try_recv() {
                Ok(InputMsg::Event(ev)) => events.push(ev),
                Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
                Err(mpsc::error::TryRecvError::Empty) => break,
                Err(mpsc::error::TryRecvError::Disconnected) => {
                    return Err(anyhow!("input pump disconnected"));
                }
            }
        }
        Ok(events)
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a reader blocked on a full channel wakes up.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of dropping events.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Scroll input tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputConfig {
    /// Rows moved per wheel notch.
    pub lines_per_tick: u16,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            lines_per_tick: DEFAULT_LINES_PER_TICK,
        }
    }
}

/// What an input event asks the scaffold to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollIntent {
    /// Scroll by `rows`; negative values move content up.
    Delta { rows: f32, source: ScrollSource },
    JumpToTop,
}

/// Result of feeding one event to [`handle_scroll_event`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollAction {
    /// A delta was dispatched; `consumed_px` is what the list and header took.
    Scrolled { consumed_px: f32 },
    /// The caller should run `state.scroll_to_item(0)`.
    JumpToTop,
    Ignored,
}

/// Maps a terminal event to a scroll intent.
///
/// Wheel events only count inside `state`'s last rendered area. Paging moves
/// one row less than the viewport so a line of context stays visible.
#[must_use]
pub fn scroll_intent(
    state: &CollapsibleState,
    event: &Event,
    config: &InputConfig,
) -> Option<ScrollIntent> {
    match event {
        Event::Mouse(MouseEvent {
            kind, column, row, ..
        }) if state.contains(*column, *row) => {
            let tick = f32::from(config.lines_per_tick);
            let rows = match kind {
                MouseEventKind::ScrollDown => -tick,
                MouseEventKind::ScrollUp => tick,
                _ => return None,
            };
            Some(ScrollIntent::Delta {
                rows,
                source: ScrollSource::Wheel,
            })
        }
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press | KeyEventKind::Repeat,
            ..
        }) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            let page = f32::from(page_rows(state));
            let rows = match code {
                KeyCode::Down | KeyCode::Char('j') => -1.0,
                KeyCode::Up | KeyCode::Char('k') => 1.0,
                KeyCode::PageDown => -page,
                KeyCode::PageUp => page,
                KeyCode::Home => return Some(ScrollIntent::JumpToTop),
                _ => return None,
            };
            Some(ScrollIntent::Delta {
                rows,
                source: ScrollSource::Keyboard,
            })
        }
        _ => None,
    }
}

fn page_rows(state: &CollapsibleState) -> u16 {
    state
        .list_state()
        .viewport_rows()
        .or_else(|| state.viewport().map(|area| area.height))
        .unwrap_or(1)
        .saturating_sub(1)
        .max(1)
}

/// Applies a scroll event to `state`.
///
/// Deltas are dispatched immediately. A jump is returned to the caller, which
/// owns the runtime the jump future should be spawned on.
pub fn handle_scroll_event(
    state: &mut CollapsibleState,
    event: &Event,
    config: &InputConfig,
) -> ScrollAction {
    match scroll_intent(state, event, config) {
        Some(ScrollIntent::Delta { rows, source }) => {
            let delta_px = state.density().rows_to_delta_px(rows);
            let consumed_px = state.dispatch_scroll(delta_px, source);
            debug!(rows, consumed_px, ?source, "Scroll input");
            ScrollAction::Scrolled { consumed_px }
        }
        Some(ScrollIntent::JumpToTop) => ScrollAction::JumpToTop,
        None => ScrollAction::Ignored,
    }
}
