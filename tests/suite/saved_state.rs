use collapsible_tui::{
    CollapsibleSaver, CollapsibleState, ListPosition, ListState, SavedStateMap, ScrollSource,
    StateSaver, remember_collapsible_state,
};

use crate::common::{draw, rows, terminal};

fn reload(map: &SavedStateMap) -> SavedStateMap {
    let json = serde_json::to_string(map).expect("encode");
    serde_json::from_str(&json).expect("decode")
}

#[test]
fn collapsed_header_survives_a_json_round_trip() {
    let mut terminal = terminal();
    let mut state = CollapsibleState::default();
    draw(&mut terminal, &mut state);
    state.dispatch_scroll(-3.0, ScrollSource::Wheel);

    let saved = reload(&state.save());
    let mut restored = remember_collapsible_state(Some(&saved), 0, 0.0, ListState::new());
    assert_eq!(restored.header_height(), 4);
    assert_eq!(restored.header_offset(), -3.0);

    // Only the header is saved; the fresh list starts at the top.
    draw(&mut terminal, &mut restored);
    let rows = rows(&terminal);
    assert_eq!(rows[0], "band 3");
    assert_eq!(rows[4], "item 0");
}

#[test]
fn saved_map_uses_stable_keys() {
    let state = CollapsibleState::new(4, -1.5, ListState::new());
    let json = serde_json::to_value(state.save()).expect("encode");
    assert_eq!(json["headerHeightPx"], 4);
    assert_eq!(json["headerOffsetPx"], -1.5);
}

#[test]
fn saver_hands_back_the_shared_list() {
    let list = ListState::new();
    let saver = CollapsibleSaver::new(list.clone());
    let saved = saver.save(&CollapsibleState::new(4, -4.0, ListState::new()));

    let restored = saver.restore(&reload(&saved)).expect("restore");
    list.scroll_by(2.0);
    assert_eq!(restored.list_state().position(), ListPosition::new(0, 2));
    assert!(restored.is_collapsed());
}

#[test]
fn unreadable_map_uses_initial_values() {
    let saved: SavedStateMap =
        serde_json::from_str(r#"{"headerHeightPx": "tall", "headerOffsetPx": -2.0}"#)
            .expect("decode");
    let state = remember_collapsible_state(Some(&saved), 6, -2.0, ListState::new());
    assert_eq!(state.header_height(), 6);
    assert_eq!(state.header_offset(), -2.0);
}

#[test]
fn restored_offset_is_clamped_on_the_next_render() {
    let saved: SavedStateMap =
        serde_json::from_str(r#"{"headerHeightPx": 40, "headerOffsetPx": -30.0}"#)
            .expect("decode");
    let mut state = remember_collapsible_state(Some(&saved), 0, 0.0, ListState::new());
    assert_eq!(state.header_offset(), -30.0);

    let mut terminal = terminal();
    draw(&mut terminal, &mut state);
    assert_eq!(state.header_height(), 4);
    assert_eq!(state.header_offset(), -4.0);
}
