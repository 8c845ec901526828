//! Rendering through a real `Terminal<TestBackend>`.

use collapsible_tui::{CollapsibleState, ScrollSource};

use crate::common::{SHADOW_BG, bg_at, draw, rows, terminal};

#[test]
fn expanded_header_sits_above_first_item() {
    let mut terminal = terminal();
    let mut state = CollapsibleState::default();
    draw(&mut terminal, &mut state);

    let rows = rows(&terminal);
    assert_eq!(&rows[..5], ["title", "band 1", "band 2", "band 3", "item 0"]);
    assert_eq!(rows[7], "item 1");
    assert_eq!(rows[10], "item 2");
    assert_eq!(state.header_height(), 4);
    assert!(state.is_expanded());
}

#[test]
fn shadow_follows_header_bottom_edge() {
    let mut terminal = terminal();
    let mut state = CollapsibleState::default();
    draw(&mut terminal, &mut state);
    assert_eq!(bg_at(&terminal, 0, 4), Some(SHADOW_BG));
    assert_ne!(bg_at(&terminal, 0, 5), Some(SHADOW_BG));

    state.dispatch_scroll(-2.0, ScrollSource::Wheel);
    draw(&mut terminal, &mut state);
    assert_eq!(bg_at(&terminal, 0, 2), Some(SHADOW_BG));
    assert_ne!(bg_at(&terminal, 0, 4), Some(SHADOW_BG));
}

#[test]
fn partially_collapsed_header_keeps_its_lower_rows() {
    let mut terminal = terminal();
    let mut state = CollapsibleState::default();
    draw(&mut terminal, &mut state);

    state.dispatch_scroll(-2.0, ScrollSource::Wheel);
    draw(&mut terminal, &mut state);

    let rows = rows(&terminal);
    assert_eq!(&rows[..3], ["band 2", "band 3", "item 0"]);
    assert_eq!(state.header_offset(), -2.0);
}

#[test]
fn collapsed_header_leaves_the_whole_area_to_items() {
    let mut terminal = terminal();
    let mut state = CollapsibleState::default();
    draw(&mut terminal, &mut state);

    state.dispatch_scroll(-6.0, ScrollSource::Wheel);
    draw(&mut terminal, &mut state);

    let rows = rows(&terminal);
    assert!(state.is_collapsed());
    assert_eq!(rows[0], ".");
    assert_eq!(rows[1], "item 1");
    assert!(rows.iter().all(|row| !row.starts_with("band") && row != "title"));
    assert_ne!(bg_at(&terminal, 0, 0), Some(SHADOW_BG));
}

#[test]
fn scrolling_back_reveals_header_mid_list() {
    let mut terminal = terminal();
    let mut state = CollapsibleState::default();
    draw(&mut terminal, &mut state);

    state.dispatch_scroll(-6.0, ScrollSource::Wheel);
    draw(&mut terminal, &mut state);
    state.dispatch_scroll(1.0, ScrollSource::Wheel);
    draw(&mut terminal, &mut state);

    // The list is still far from its top, but the header starts coming back.
    let rows = rows(&terminal);
    assert!(!state.list_state().is_at_top());
    assert_eq!(state.header_offset(), -3.0);
    assert_eq!(rows[0], "band 3");
    assert_eq!(rows[2], "item 1");
}

#[test]
fn header_expanded_mid_list_covers_the_items_below_it() {
    let mut terminal = terminal();
    let mut state = CollapsibleState::default();
    draw(&mut terminal, &mut state);

    state.dispatch_scroll(-11.0, ScrollSource::Wheel);
    draw(&mut terminal, &mut state);
    state.dispatch_scroll(4.0, ScrollSource::Wheel);
    draw(&mut terminal, &mut state);

    let rows = rows(&terminal);
    assert!(state.is_expanded());
    assert!(!state.list_state().is_at_top());
    assert_eq!(&rows[..4], ["title", "band 1", "band 2", "band 3"]);
}

#[test]
fn hit_testing_skips_cells_under_the_header() {
    let mut terminal = terminal();
    let mut state = CollapsibleState::default();
    draw(&mut terminal, &mut state);

    assert_eq!(state.item_at(3, 0), None);
    assert_eq!(state.item_at(3, 3), None);
    assert_eq!(state.item_at(3, 4), Some(0));
    assert_eq!(state.item_at(3, 8), Some(1));
    assert_eq!(state.item_at(3, 11), Some(2));
}
