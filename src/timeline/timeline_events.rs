//! Timeline key handling
//!
//! Navigation keys move the highlight and immediately dispatch the insight
//! selection flow for the newly focused milestone.

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, Focus};

/// Handle keys while the timeline sidebar is focused.
pub fn handle_timeline_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.timeline.select_next() {
                dispatch_selection(app);
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if app.timeline.select_previous() {
                dispatch_selection(app);
            }
        }
        KeyCode::Char('g') | KeyCode::Home => {
            if app.timeline.select_first() {
                dispatch_selection(app);
            }
        }
        KeyCode::Char('G') | KeyCode::End => {
            if app.timeline.select_last() {
                dispatch_selection(app);
            }
        }
        // Re-dispatch is a no-op for the same entity; harmless
        KeyCode::Enter => dispatch_selection(app),
        KeyCode::Char('/') => {
            app.focus = Focus::Search;
        }
        _ => {}
    }
    app.mark_dirty();
}

/// Run the selection flow for the currently highlighted milestone.
pub fn dispatch_selection(app: &mut App) {
    let milestone = app.timeline.selected();
    app.insight.on_select(milestone);
    app.mark_dirty();
}
