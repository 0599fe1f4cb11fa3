//! Insight state management
//!
//! Owns the insight cache, the currently displayed insight text, the loading
//! flag, and the channel handles for the worker and scheduler threads. All
//! cache writes happen here, on the UI thread, when responses are drained.

use std::sync::mpsc::{Receiver, Sender};

use crate::catalog::{Milestone, key_year};

use super::cache::InsightCache;
use super::provider::is_error_text;
use super::scheduler::PrefetchPhase;

/// Requests sent to the insight worker thread.
#[derive(Debug)]
pub enum InsightRequest {
    /// Resolve the insight for a selected milestone
    Insight {
        key: String,
        topic: String,
        request_id: u64,
    },
    /// Resolve a free-text archive search query
    Search { query: String, request_id: u64 },
    /// Resolve the quick-facts list (sent once at startup)
    QuickStats,
}

/// Responses sent back from the worker and scheduler threads.
#[derive(Debug)]
pub enum InsightResponse {
    Insight {
        key: String,
        text: String,
        request_id: u64,
    },
    Search {
        text: String,
        request_id: u64,
    },
    QuickStats(Vec<String>),
    /// A background prefetch resolved; populates the cache only, never the
    /// visible state.
    Prefetched {
        key: String,
        text: String,
    },
    PrefetchDone,
    /// The worker thread crashed or disconnected
    WorkerError(String),
}

/// State for the selected milestone's insight.
pub struct InsightState {
    pub cache: InsightCache,
    /// Displayed insight text; empty means "not yet resolved" and the render
    /// falls back to the milestone's local description.
    pub insight: String,
    pub loading: bool,
    /// Year of the currently selected milestone. Year is the catalog's
    /// primary key, so this is the identity the stale-response guard
    /// compares at resolution time.
    selected_year: String,
    request_tx: Option<Sender<InsightRequest>>,
    pub(crate) response_rx: Option<Receiver<InsightResponse>>,
    request_id: u64,
    in_flight_request_id: Option<u64>,
    pub prefetch_phase: PrefetchPhase,
}

impl Default for InsightState {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightState {
    pub fn new() -> Self {
        Self {
            cache: InsightCache::new(),
            insight: String::new(),
            loading: false,
            selected_year: String::new(),
            request_tx: None,
            response_rx: None,
            request_id: 0,
            in_flight_request_id: None,
            prefetch_phase: PrefetchPhase::NotStarted,
        }
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<InsightRequest>,
        response_rx: Receiver<InsightResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Issue the next request id. Ids increase monotonically so responses
    /// from superseded requests can be filtered out.
    pub fn next_request_id(&mut self) -> u64 {
        self.request_id = self.request_id.wrapping_add(1);
        self.request_id
    }

    /// Send a request to the worker. Returns false when no worker is wired
    /// up or the worker has gone away.
    pub fn send_request(&self, request: InsightRequest) -> bool {
        match self.request_tx {
            Some(ref tx) => tx.send(request).is_ok(),
            None => false,
        }
    }

    /// React to the user selecting a milestone.
    ///
    /// Re-selecting the same entity (same year) is a no-op. A cache hit is
    /// served immediately with no fetch; a miss clears the displayed insight
    /// so the render shows the local description, and dispatches a fetch.
    pub fn on_select(&mut self, milestone: &Milestone) {
        if self.selected_year == milestone.year {
            return;
        }
        self.selected_year = milestone.year.to_string();

        let key = milestone.cache_key();
        if let Some(text) = self.cache.get(&key) {
            self.insight = text.to_string();
            self.loading = false;
            self.in_flight_request_id = None;
            return;
        }

        self.insight.clear();
        self.loading = true;
        let request_id = self.next_request_id();
        self.in_flight_request_id = Some(request_id);

        let sent = self.send_request(InsightRequest::Insight {
            key,
            topic: milestone.topic(),
            request_id,
        });
        if !sent {
            // No worker available; stay on the local description.
            self.loading = false;
            self.in_flight_request_id = None;
        }
    }

    /// Apply a resolved insight from the worker.
    ///
    /// The result is cached for future selections (unless it is a
    /// sentinel/fallback, which stays uncached so the key is retryable), but
    /// it only reaches the visible state when the milestone it belongs to is
    /// still the selected one and the request has not been superseded.
    pub fn apply_insight_response(&mut self, key: String, text: String, request_id: u64) {
        if !is_error_text(&text) {
            self.cache.insert(key.clone(), text.clone());
        }

        if key_year(&key) != self.selected_year {
            log::debug!("Discarding stale insight for {}", key);
            return;
        }
        if self.in_flight_request_id != Some(request_id) {
            log::debug!("Discarding superseded insight response {}", request_id);
            return;
        }

        self.insight = text;
        self.loading = false;
        self.in_flight_request_id = None;
    }

    /// Apply a background prefetch result. Populates shared lookup storage
    /// only; the scheduler never touches the visible state.
    pub fn apply_prefetched(&mut self, key: String, text: String) {
        if is_error_text(&text) {
            log::debug!("Not caching failed prefetch for {}", key);
            return;
        }
        self.cache.insert(key, text);
    }

    /// Start the prefetch scheduler exactly once per session.
    ///
    /// Subsequent calls are no-ops (the latch survives re-initialization
    /// events). Returns true if this call started the schedule.
    pub fn start_prefetch(
        &mut self,
        catalog: &[Milestone],
        config: &crate::config::insight_types::InsightConfig,
        provider: super::provider::InsightProvider,
        response_tx: Sender<InsightResponse>,
    ) -> bool {
        if self.prefetch_phase != PrefetchPhase::NotStarted {
            return false;
        }

        let plan = super::scheduler::prefetch_plan(
            catalog,
            config.prefetch_window,
            &self.cache.cached_keys(),
            config.prefetch_base_delay_ms,
            config.prefetch_step_ms,
        );

        if plan.is_empty() {
            self.prefetch_phase = PrefetchPhase::Done;
            return true;
        }

        super::scheduler::spawn_prefetch(provider, plan, response_tx);
        self.prefetch_phase = PrefetchPhase::Running;
        true
    }

    pub fn mark_prefetch_done(&mut self) {
        self.prefetch_phase = PrefetchPhase::Done;
    }

    /// Clear in-flight state after a worker failure so the render falls back
    /// to the local description instead of spinning forever.
    pub fn on_worker_error(&mut self) {
        self.loading = false;
        self.in_flight_request_id = None;
    }

    /// Year of the currently selected milestone (empty before the first
    /// selection).
    pub fn selected_year(&self) -> &str {
        &self.selected_year
    }

    /// Whether there's an in-flight request
    #[cfg(test)]
    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight_request_id.is_some()
    }
}

#[cfg(test)]
#[path = "insight_state_tests.rs"]
mod insight_state_tests;
