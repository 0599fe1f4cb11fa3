//! Search box key handling

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, Focus};

/// Handle keys while the search box is focused.
pub fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.focus = Focus::Timeline;
        }
        KeyCode::Enter => {
            let App {
                ref mut search,
                ref mut insight,
                ..
            } = *app;
            search.submit(insight);
        }
        _ => {
            app.search.textarea.input(key);
        }
    }
    app.mark_dirty();
}
