//! Archive search state
//!
//! Free-text queries go through the same fetch boundary as milestone
//! insights but are displayed separately and never cached. A request-id
//! guard discards responses from superseded submissions.

use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use crate::insight::{InsightRequest, InsightState};

/// Creates a TextArea configured for the search input.
fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea.set_placeholder_text("Query the Professor...");
    textarea
}

pub struct SearchState {
    pub textarea: TextArea<'static>,
    pub searching: bool,
    /// The answer for the last submitted query, if any
    pub result: Option<String>,
    in_flight_request_id: Option<u64>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            textarea: create_search_textarea(),
            searching: false,
            result: None,
            in_flight_request_id: None,
        }
    }

    /// The current query text.
    pub fn query(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Submit the current query through the insight worker.
    ///
    /// Blank queries are ignored. Returns true if a request was dispatched.
    pub fn submit(&mut self, insight: &mut InsightState) -> bool {
        let query = self.query().trim().to_string();
        if query.is_empty() {
            return false;
        }

        let request_id = insight.next_request_id();
        if !insight.send_request(InsightRequest::Search { query, request_id }) {
            return false;
        }

        self.searching = true;
        self.result = None;
        self.in_flight_request_id = Some(request_id);
        true
    }

    /// Apply a search response. Responses from superseded submissions are
    /// discarded.
    pub fn apply_response(&mut self, text: String, request_id: u64) {
        if self.in_flight_request_id != Some(request_id) {
            log::debug!("Discarding superseded search response {}", request_id);
            return;
        }
        self.result = Some(text);
        self.searching = false;
        self.in_flight_request_id = None;
    }

    /// Clear in-flight state after a worker failure.
    pub fn on_worker_error(&mut self) {
        self.searching = false;
        self.in_flight_request_id = None;
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
