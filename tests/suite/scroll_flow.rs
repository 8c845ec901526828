//! Scroll sequences and jumps across several frames.

use proptest::prelude::*;

use collapsible_tui::{CollapsibleState, ListPosition, ScrollSource};

use crate::common::{HEADER_ROWS, HEIGHT, ITEM_ROWS, ITEMS, draw, rows, terminal};

const MAX_SCROLL: u64 = HEADER_ROWS as u64 + ITEMS as u64 * ITEM_ROWS as u64 - HEIGHT as u64;

fn absolute(position: ListPosition) -> u64 {
    position.index as u64 * u64::from(ITEM_ROWS) + u64::from(position.offset)
}

#[test]
fn list_stops_at_its_last_row() {
    let mut terminal = terminal();
    let mut state = CollapsibleState::default();
    draw(&mut terminal, &mut state);

    let consumed = state.dispatch_scroll(-100.0, ScrollSource::Wheel);
    draw(&mut terminal, &mut state);

    assert_eq!(consumed, -(MAX_SCROLL as f32));
    assert_eq!(state.list_state().position(), ListPosition::new(9, 1));
    assert!(state.is_collapsed());
    assert_eq!(rows(&terminal)[9], "item 11");
}

#[test]
fn scrolling_back_to_the_top_restores_the_first_frame() {
    let mut terminal = terminal();
    let mut state = CollapsibleState::default();
    draw(&mut terminal, &mut state);
    let first = rows(&terminal);

    state.dispatch_scroll(-9.0, ScrollSource::Wheel);
    draw(&mut terminal, &mut state);
    state.dispatch_scroll(20.0, ScrollSource::Keyboard);
    draw(&mut terminal, &mut state);

    assert!(state.list_state().is_at_top());
    assert!(state.is_expanded());
    assert_eq!(rows(&terminal), first);
}

#[tokio::test]
async fn jump_lands_at_the_top_when_header_is_collapsed() {
    let mut terminal = terminal();
    let mut state = CollapsibleState::default();
    draw(&mut terminal, &mut state);
    state.dispatch_scroll(-6.0, ScrollSource::Wheel);
    draw(&mut terminal, &mut state);

    let jump = tokio::spawn(state.scroll_to_item(5));
    draw(&mut terminal, &mut state);
    jump.await.expect("jump task");

    // Item 5 scrolled four rows is item 6 scrolled one.
    assert_eq!(state.list_state().position(), ListPosition::new(6, 1));
    assert_eq!(rows(&terminal)[0], "item 5");
}

#[tokio::test]
async fn jump_lands_below_a_partially_visible_header() {
    let mut terminal = terminal();
    let mut state = CollapsibleState::default();
    draw(&mut terminal, &mut state);
    state.dispatch_scroll(-2.0, ScrollSource::Wheel);
    draw(&mut terminal, &mut state);

    let jump = state.scroll_to_item(3);
    draw(&mut terminal, &mut state);
    jump.await;

    let rows = rows(&terminal);
    assert_eq!(state.list_state().position(), ListPosition::new(3, 2));
    assert_eq!(&rows[..3], ["band 2", "band 3", "item 3"]);
}

#[tokio::test]
async fn later_jump_replaces_an_earlier_one() {
    let mut terminal = terminal();
    let mut state = CollapsibleState::default();
    draw(&mut terminal, &mut state);

    let first = tokio::spawn(state.scroll_to_item(7));
    let second = tokio::spawn(state.scroll_to_item(2));
    draw(&mut terminal, &mut state);
    first.await.expect("first jump");
    second.await.expect("second jump");

    assert_eq!(state.list_state().position(), ListPosition::new(2, 0));
}

proptest! {
    #[test]
    fn header_and_list_stay_in_bounds(deltas in prop::collection::vec(-8i16..=8, 1..24)) {
        let mut terminal = terminal();
        let mut state = CollapsibleState::default();
        draw(&mut terminal, &mut state);

        for delta in deltas {
            state.dispatch_scroll(f32::from(delta), ScrollSource::Wheel);
            draw(&mut terminal, &mut state);

            let offset = state.header_offset();
            prop_assert!((-f32::from(HEADER_ROWS)..=0.0).contains(&offset));
            prop_assert!(absolute(state.list_state().position()) <= MAX_SCROLL);
            if state.is_expanded() {
                let first = rows(&terminal)[0].clone();
                prop_assert_eq!(first.as_str(), "title");
            }
        }
    }
}
