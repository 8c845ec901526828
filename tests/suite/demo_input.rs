//! The demo screen driven by terminal events.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use collapsible_tui::demo::{DemoCommand, DemoOptions, DemoScreen, ITEM_COUNT, ITEM_HEIGHT, draw};
use collapsible_tui::{CollapsibleState, InputConfig, ListPosition};

const WIDTH: u16 = 40;
const HEIGHT: u16 = 20;

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

fn setup(options: DemoOptions) -> (Terminal<TestBackend>, DemoScreen) {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("terminal");
    let mut screen = DemoScreen::new(CollapsibleState::default(), options);
    terminal.draw(|frame| draw(frame, &mut screen)).expect("draw");
    (terminal, screen)
}

fn redraw(terminal: &mut Terminal<TestBackend>, screen: &mut DemoScreen) {
    terminal.draw(|frame| draw(frame, screen)).expect("draw");
}

#[test]
fn wheel_collapses_header_by_lines_per_tick() {
    let (mut terminal, mut screen) = setup(DemoOptions::default());

    for _ in 0..3 {
        let command = screen.handle_event(&mouse(MouseEventKind::ScrollDown, 5, 15));
        assert_eq!(command, DemoCommand::None);
    }
    redraw(&mut terminal, &mut screen);

    // Nine rows into five-row items lands four rows into item 1.
    assert_eq!(screen.state().header_offset(), -9.0);
    assert_eq!(screen.state().list_state().position(), ListPosition::new(1, 4));
    assert!(screen.take_changed());
}

#[test]
fn configured_tick_size_is_respected() {
    let options = DemoOptions {
        input: InputConfig { lines_per_tick: 1 },
        ..DemoOptions::default()
    };
    let (_terminal, mut screen) = setup(options);

    screen.handle_event(&mouse(MouseEventKind::ScrollDown, 5, 15));
    assert_eq!(screen.state().header_offset(), -1.0);
}

#[test]
fn wheel_outside_the_scaffold_is_ignored() {
    let (_terminal, mut screen) = setup(DemoOptions::default());
    screen.take_changed();

    screen.handle_event(&mouse(MouseEventKind::ScrollDown, 5, HEIGHT + 3));
    assert_eq!(screen.state().header_offset(), 0.0);
    assert!(!screen.take_changed());
}

#[test]
fn page_down_collapses_fully_and_moves_a_screen() {
    let (mut terminal, mut screen) = setup(DemoOptions::default());

    screen.handle_event(&key(KeyCode::PageDown, KeyModifiers::NONE));
    redraw(&mut terminal, &mut screen);

    assert!(screen.state().is_collapsed());
    let position = screen.state().list_state().position();
    assert_eq!(
        position.index * usize::from(ITEM_HEIGHT) + position.offset as usize,
        usize::from(HEIGHT - 1)
    );
}

#[test]
fn modified_keys_do_not_scroll() {
    let (_terminal, mut screen) = setup(DemoOptions::default());
    let command = screen.handle_event(&key(KeyCode::Char('j'), KeyModifiers::ALT));
    assert_eq!(command, DemoCommand::None);
    assert!(screen.state().is_expanded());
}

#[tokio::test]
async fn click_after_scrolling_returns_first_item_below_header() {
    let (mut terminal, mut screen) = setup(DemoOptions::default());
    for _ in 0..3 {
        screen.handle_event(&mouse(MouseEventKind::ScrollDown, 5, 15));
    }
    redraw(&mut terminal, &mut screen);

    let command = screen.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), 5, 3));
    assert_eq!(command, DemoCommand::JumpToTop);

    let jump = tokio::spawn(screen.jump_to_top());
    redraw(&mut terminal, &mut screen);
    jump.await.expect("jump task");

    // One header row is still showing, so the first item starts right under it.
    assert_eq!(screen.state().list_state().position(), ListPosition::new(1, 4));
    assert_eq!(screen.state().item_at(5, 1), Some(0));
    assert_eq!(screen.state().item_at(5, 0), None);
}

#[test]
fn every_item_is_reachable() {
    let (mut terminal, mut screen) = setup(DemoOptions::default());
    for _ in 0..40 {
        screen.handle_event(&key(KeyCode::Down, KeyModifiers::NONE));
    }
    redraw(&mut terminal, &mut screen);

    let last = ITEM_COUNT - 1;
    let bottom = HEIGHT - 1;
    assert_eq!(screen.state().item_at(5, bottom), Some(last));
}
