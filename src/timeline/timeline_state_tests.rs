//! Tests for timeline navigation

use super::*;

#[test]
fn test_starts_on_first_entry() {
    let timeline = TimelineState::new();
    assert_eq!(timeline.selected_index, 0);
    assert_eq!(timeline.selected().year, "1996");
}

#[test]
fn test_select_next_moves_down() {
    let mut timeline = TimelineState::new();
    assert!(timeline.select_next());
    assert_eq!(timeline.selected().year, "1998");
}

#[test]
fn test_select_next_clamps_at_end() {
    let mut timeline = TimelineState::new();
    timeline.select_last();
    assert!(!timeline.select_next());
    assert_eq!(timeline.selected_index, timeline.len() - 1);
}

#[test]
fn test_select_previous_clamps_at_start() {
    let mut timeline = TimelineState::new();
    assert!(!timeline.select_previous());
    assert_eq!(timeline.selected_index, 0);
}

#[test]
fn test_select_first_and_last() {
    let mut timeline = TimelineState::new();
    assert!(timeline.select_last());
    assert_eq!(timeline.selected().year, "2022");
    assert!(timeline.select_first());
    assert_eq!(timeline.selected().year, "1996");
    // Already there: no move reported
    assert!(!timeline.select_first());
}

#[test]
fn test_scroll_follows_selection_down() {
    let mut timeline = TimelineState::new();
    timeline.select_last();
    timeline.scroll_to_selected(4);
    assert_eq!(timeline.offset, timeline.len() - 4);
}

#[test]
fn test_scroll_follows_selection_up() {
    let mut timeline = TimelineState::new();
    timeline.select_last();
    timeline.scroll_to_selected(4);
    timeline.select_first();
    timeline.scroll_to_selected(4);
    assert_eq!(timeline.offset, 0);
}

#[test]
fn test_scroll_noop_when_visible() {
    let mut timeline = TimelineState::new();
    timeline.select_next();
    timeline.scroll_to_selected(4);
    assert_eq!(timeline.offset, 0);
}
