//! Shared test utilities and fixtures
//!
//! Renders scaffolds into ratatui's `TestBackend` and reads rows back as text.

#![allow(dead_code)]

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

use collapsible_tui::{CollapsibleScaffold, CollapsibleState};

pub const WIDTH: u16 = 24;
pub const HEIGHT: u16 = 12;
pub const HEADER_ROWS: u16 = 4;
pub const ITEM_ROWS: u16 = 3;
pub const ITEMS: usize = 12;
pub const SHADOW_BG: Color = Color::Indexed(240);

pub fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("test terminal")
}

/// Draws a four-row header ("title" then "band 1..3") over twelve three-row items.
pub fn draw(terminal: &mut Terminal<TestBackend>, state: &mut CollapsibleState) {
    terminal
        .draw(|frame| {
            let scaffold = CollapsibleScaffold::new(
                |scope| {
                    scope
                        .collapsible(
                            Paragraph::new("title\nband 1\nband 2\nband 3")
                                .block(Block::new()),
                            HEADER_ROWS,
                        )
                        .shadow_style(Style::default().bg(SHADOW_BG))
                },
                |list| {
                    list.items(0..ITEMS, ITEM_ROWS, |i| {
                        Paragraph::new(format!("item {i}\n.\n."))
                    });
                },
            );
            frame.render_stateful_widget(scaffold, frame.area(), state);
        })
        .expect("draw");
}

pub fn row(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer.cell((x, y)).map_or(" ", |cell| cell.symbol()))
        .collect::<String>()
        .trim_end()
        .to_string()
}

pub fn rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height).map(|y| row(buffer, y)).collect()
}

pub fn bg_at(terminal: &Terminal<TestBackend>, x: u16, y: u16) -> Option<Color> {
    terminal.backend().buffer().cell((x, y)).map(|cell| cell.bg)
}
