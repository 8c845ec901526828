//! The demo screen: an app bar and an image placeholder collapsing over ten items.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Padding, Paragraph, Widget},
};
use tracing::debug;

use collapsible_types::{DEFAULT_ELEVATION, Density, UiOptions};

use crate::input::{InputConfig, ScrollAction, handle_scroll_event};
use crate::scaffold::CollapsibleScaffold;
use crate::state::CollapsibleState;
use crate::theme::{Glyphs, Palette, glyphs, palette, styles};

pub const DEMO_TITLE: &str = "CollapsingToolbar";
pub const IMAGE_LABEL: &str = "e.g. Your Image";
pub const ITEM_COUNT: usize = 10;
pub const ITEM_HEIGHT: u16 = 5;
pub const APP_BAR_HEIGHT: u16 = 3;
pub const IMAGE_HEIGHT: u16 = 7;
pub const HEADER_HEIGHT: u16 = APP_BAR_HEIGHT + IMAGE_HEIGHT;

/// Presentation knobs for the demo screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoOptions {
    pub ui: UiOptions,
    pub elevation: u16,
    pub density: Density,
    pub input: InputConfig,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            ui: UiOptions::default(),
            elevation: DEFAULT_ELEVATION,
            density: Density::default(),
            input: InputConfig::default(),
        }
    }
}

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DemoCommand {
    None,
    /// Spawn [`DemoScreen::jump_to_top`].
    JumpToTop,
    Quit,
}

pub struct DemoScreen {
    state: CollapsibleState,
    options: DemoOptions,
    palette: Palette,
    glyphs: Glyphs,
    should_quit: bool,
}

impl DemoScreen {
    #[must_use]
    pub fn new(state: CollapsibleState, options: DemoOptions) -> Self {
        Self {
            state,
            palette: palette(options.ui),
            glyphs: glyphs(options.ui),
            options,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> &CollapsibleState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CollapsibleState {
        &mut self.state
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether anything visible changed since the last call.
    pub fn take_changed(&mut self) -> bool {
        self.state.take_changed()
    }

    /// Scrolls the list back to the first item, below the header as it is now.
    pub fn jump_to_top(&self) -> impl Future<Output = ()> + Send + use<> {
        self.state.scroll_to_item(0)
    }

    pub fn handle_event(&mut self, event: &Event) -> DemoCommand {
        if is_quit(event) {
            self.should_quit = true;
            return DemoCommand::Quit;
        }

        if let Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) = event
        {
            return match self.state.item_at(*column, *row) {
                Some(index) => {
                    debug!(index, "Item clicked");
                    DemoCommand::JumpToTop
                }
                None => DemoCommand::None,
            };
        }

        match handle_scroll_event(&mut self.state, event, &self.options.input) {
            ScrollAction::JumpToTop => DemoCommand::JumpToTop,
            ScrollAction::Scrolled { .. } | ScrollAction::Ignored => DemoCommand::None,
        }
    }
}

fn is_quit(event: &Event) -> bool {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('q') | KeyCode::Esc => true,
            KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        },
        _ => false,
    }
}

/// App bar over an image placeholder.
struct DemoHeader {
    palette: Palette,
}

impl Widget for DemoHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [bar, image] =
            Layout::vertical([Constraint::Length(APP_BAR_HEIGHT), Constraint::Fill(1)])
                .areas(area);

        Paragraph::new(DEMO_TITLE)
            .style(styles::app_bar(&self.palette))
            .block(Block::new().padding(Padding::new(2, 2, 1, 0)))
            .render(bar, buf);

        Block::new()
            .style(styles::image(&self.palette))
            .render(image, buf);
        let [_, label, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(image);
        Paragraph::new(IMAGE_LABEL)
            .alignment(Alignment::Center)
            .render(label, buf);
    }
}

fn demo_item(index: usize, palette: &Palette, glyphs: &Glyphs) -> Paragraph<'static> {
    match glyphs.item_border {
        Some(border_type) => Paragraph::new(format!("item {index}"))
            .style(styles::item_text(palette))
            .block(
                Block::bordered()
                    .border_type(border_type)
                    .border_style(styles::item_border(palette))
                    .padding(Padding::horizontal(1)),
            ),
        None => Paragraph::new(vec![
            Line::from(""),
            Line::from(format!("{} item {index}", glyphs.bullet)),
        ])
        .style(styles::item_text(palette))
        .block(Block::new().padding(Padding::horizontal(1))),
    }
}

pub fn draw(frame: &mut Frame, screen: &mut DemoScreen) {
    let palette = screen.palette;
    let glyphs = screen.glyphs;
    let DemoOptions {
        elevation, density, ..
    } = screen.options;

    let scaffold = CollapsibleScaffold::new(
        move |scope| {
            scope
                .collapsible(DemoHeader { palette }, HEADER_HEIGHT)
                .elevation(elevation)
                .shadow_style(styles::shadow(&palette))
        },
        move |list| {
            list.items(0..ITEM_COUNT, ITEM_HEIGHT, move |index| {
                demo_item(index, &palette, &glyphs)
            });
        },
    )
    .style(styles::background(&palette))
    .density(density);

    frame.render_stateful_widget(scaffold, frame.area(), &mut screen.state);
}
