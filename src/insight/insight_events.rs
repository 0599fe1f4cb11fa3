//! Insight response polling
//!
//! Drains the shared response channel at the event-loop poll point and
//! routes each response to the state that owns it. This is the only place
//! cache writes happen, which keeps the write-once discipline on a single
//! thread.

use std::sync::mpsc::TryRecvError;

use crate::facts::FactsState;
use crate::notification::NotificationState;
use crate::search::SearchState;

use super::insight_state::{InsightResponse, InsightState};

/// Poll the response channel for worker and scheduler results.
///
/// Uses try_recv() for non-blocking polling. Returns true if any state
/// changed (responses processed or the worker disconnected).
pub fn poll_responses(
    insight: &mut InsightState,
    search: &mut SearchState,
    facts: &mut FactsState,
    notification: &mut NotificationState,
) -> bool {
    let mut responses = Vec::new();
    let mut disconnected = false;

    // Drain first, process after, so the channel borrow ends before state
    // mutation starts.
    if let Some(ref rx) = insight.response_rx {
        loop {
            match rx.try_recv() {
                Ok(response) => responses.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }
    }

    let had_responses = !responses.is_empty();

    for response in responses {
        match response {
            InsightResponse::Insight {
                key,
                text,
                request_id,
            } => insight.apply_insight_response(key, text, request_id),
            InsightResponse::Prefetched { key, text } => insight.apply_prefetched(key, text),
            InsightResponse::PrefetchDone => insight.mark_prefetch_done(),
            InsightResponse::Search { text, request_id } => {
                search.apply_response(text, request_id)
            }
            InsightResponse::QuickStats(list) => facts.set_facts(list),
            InsightResponse::WorkerError(message) => {
                insight.on_worker_error();
                search.on_worker_error();
                notification.show_error(&message);
            }
        }
    }

    if disconnected && insight.loading {
        insight.on_worker_error();
        notification.show_warning("Insight worker disconnected unexpectedly");
    }

    had_responses || disconnected
}
