//! Timeline sidebar state
//!
//! Tracks which catalog entry is selected. Navigation is selection: moving
//! the highlight dispatches the insight flow for the newly focused entry.

use crate::catalog::{Milestone, catalog};

pub struct TimelineState {
    entries: &'static [Milestone],
    pub selected_index: usize,
    /// Scroll offset of the sidebar list
    pub offset: usize,
}

impl Default for TimelineState {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineState {
    /// Creates a timeline over the full catalog with the first entry
    /// selected.
    pub fn new() -> Self {
        Self {
            entries: catalog(),
            selected_index: 0,
            offset: 0,
        }
    }

    pub fn entries(&self) -> &'static [Milestone] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The currently selected milestone.
    pub fn selected(&self) -> &'static Milestone {
        &self.entries[self.selected_index]
    }

    /// Move the selection down one entry. Clamps at the end.
    /// Returns true if the selection moved.
    pub fn select_next(&mut self) -> bool {
        if self.selected_index + 1 < self.entries.len() {
            self.selected_index += 1;
            return true;
        }
        false
    }

    /// Move the selection up one entry. Clamps at the start.
    /// Returns true if the selection moved.
    pub fn select_previous(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            return true;
        }
        false
    }

    pub fn select_first(&mut self) -> bool {
        let moved = self.selected_index != 0;
        self.selected_index = 0;
        moved
    }

    pub fn select_last(&mut self) -> bool {
        let last = self.entries.len().saturating_sub(1);
        let moved = self.selected_index != last;
        self.selected_index = last;
        moved
    }

    /// Keep the selected card inside the visible window of `visible_rows`.
    pub fn scroll_to_selected(&mut self, visible_rows: usize) {
        if visible_rows == 0 {
            return;
        }
        if self.selected_index < self.offset {
            self.offset = self.selected_index;
        } else if self.selected_index >= self.offset + visible_rows {
            self.offset = self.selected_index + 1 - visible_rows;
        }
    }
}

#[cfg(test)]
#[path = "timeline_state_tests.rs"]
mod timeline_state_tests;
