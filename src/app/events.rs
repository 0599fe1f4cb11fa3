use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::state::{App, Focus};
use crate::search;
use crate::timeline;

/// Timeout for event polling - allows periodic refresh for notification
/// expiry and worker responses arriving between key presses
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                // Pasted text goes into the search box
                Event::Paste(text) => {
                    if self.focus == Focus::Search {
                        self.search.textarea.insert_str(&text);
                        self.mark_dirty();
                    }
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Global keys first
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Tab {
            self.focus = match self.focus {
                Focus::Timeline => Focus::Search,
                Focus::Search => Focus::Timeline,
            };
            self.mark_dirty();
            return;
        }

        // Not a global key, delegate to the focused pane
        match self.focus {
            Focus::Timeline => timeline::timeline_events::handle_timeline_key(self, key),
            Focus::Search => search::search_events::handle_search_key(self, key),
        }
    }
}
