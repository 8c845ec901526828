//! Collapsible demo - binary entry point and terminal session management.
//!
//! ```text
//! main() -> Settings::load() -> remember_collapsible_state() -> TerminalSession::new()
//!                                                                     |
//!                                                                     v
//!                                                     run_app() until quit -> persist::store()
//! ```
//!
//! # Event Loop
//!
//! A fixed 8ms render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`collapsible_tui::InputPump`])
//! 3. Dispatch scroll input; spawn jump requests as tasks
//! 4. Redraw if the header or list moved, or the terminal resized

mod persist;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::{
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use collapsible_config::{Settings, log_dirs, state_path};
use collapsible_tui::{
    InputConfig, InputPump, ListState,
    demo::{DemoCommand, DemoOptions, DemoScreen, draw},
    remember_collapsible_state,
};

const LOG_FILE_NAME: &str = "collapsible.log";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for dir in log_dirs() {
        if let Err(e) = fs::create_dir_all(&dir) {
            warnings.push(format!("Failed to create log dir {}: {e}", dir.display()));
            continue;
        }

        let candidate = dir.join(LOG_FILE_NAME);
        match OpenOptions::new().create(true).append(true).open(&candidate) {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Enables raw mode, the alternate screen and mouse capture (wheel and click
/// events drive the demo). On drop, all of it is undone, so the terminal stays
/// usable after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            let _ = execute!(out, DisableMouseCapture, LeaveAlternateScreen);
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = Backend::flush(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let settings = Settings::load();
    let saved_path = state_path();
    let saved = if settings.restore_state {
        saved_path.as_deref().and_then(persist::load)
    } else {
        None
    };

    // The header measures itself on the first frame.
    let state = remember_collapsible_state(saved.as_ref(), 0, 0.0, ListState::new());
    let mut screen = DemoScreen::new(
        state,
        DemoOptions {
            ui: settings.ui,
            elevation: settings.elevation,
            density: settings.density,
            input: InputConfig {
                lines_per_tick: settings.lines_per_tick,
            },
        },
    );

    let result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut screen).await
    };

    if let Some(path) = saved_path
        && let Err(e) = persist::store(&path, screen.state())
    {
        eprintln!("Failed to save state: {e:#}");
    }

    result
}

const FRAME_DURATION: Duration = Duration::from_millis(8);

async fn run_app<B>(terminal: &mut Terminal<B>, screen: &mut DemoScreen) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut needs_draw = true;

    let result: Result<()> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        let events = match input.drain() {
            Ok(events) => events,
            Err(e) => break Err(e),
        };
        for event in &events {
            if matches!(event, Event::Resize(..)) {
                needs_draw = true;
            }
            match screen.handle_event(event) {
                DemoCommand::JumpToTop => {
                    let jump = screen.jump_to_top();
                    tokio::spawn(async move {
                        jump.await;
                        tracing::debug!("Jump to first item applied");
                    });
                }
                DemoCommand::Quit | DemoCommand::None => {}
            }
        }
        if screen.should_quit() {
            break Ok(());
        }

        if screen.take_changed() || needs_draw {
            if let Err(e) = terminal.draw(|frame| draw(frame, screen)) {
                break Err(e.into());
            }
            needs_draw = false;
        }
    };

    input.shutdown().await;
    result
}
