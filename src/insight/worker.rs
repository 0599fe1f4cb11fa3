//! Insight worker thread
//!
//! Handles on-demand insight requests in a background thread so the UI never
//! blocks on the network. Receives requests via channel, resolves them
//! through the provider boundary, and sends results back to the main thread.
//!
//! Uses a current-thread tokio runtime for the async HTTP calls. Includes
//! panic handling so a crash in the HTTP stack cannot corrupt the TUI.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, Sender};

use super::insight_state::{InsightRequest, InsightResponse};
use super::provider::InsightProvider;

/// Spawn the insight worker thread.
///
/// The worker loops on blocking `recv()` (fine in a dedicated thread) and
/// resolves each request through the provider, which never fails to the
/// caller - every response carries displayable text.
pub fn spawn_worker(
    provider: InsightProvider,
    request_rx: Receiver<InsightRequest>,
    response_tx: Sender<InsightResponse>,
) {
    std::thread::spawn(move || {
        // Suppress the default panic hook: printing to stderr would corrupt
        // the TUI. Report through the response channel instead.
        let response_tx_clone = response_tx.clone();
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let panic_msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic in insight worker".to_string()
            };

            log::error!(
                "Insight worker panic: {} at {:?}",
                panic_msg,
                panic_info.location()
            );

            let _ = response_tx_clone.send(InsightResponse::WorkerError(format!(
                "Insight worker crashed: {}",
                panic_msg
            )));
        }));

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to create tokio runtime");

            rt.block_on(worker_loop(provider, request_rx, response_tx));
        }));

        panic::set_hook(prev_hook);

        if let Err(e) = result {
            let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = e.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("Insight worker thread panicked: {}", panic_msg);
        }
    });
}

/// Main worker loop - processes requests until the channel is closed.
async fn worker_loop(
    provider: InsightProvider,
    request_rx: Receiver<InsightRequest>,
    response_tx: Sender<InsightResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        match request {
            InsightRequest::Insight {
                key,
                topic,
                request_id,
            } => {
                let text = provider.fetch_insight(&topic).await;
                if response_tx
                    .send(InsightResponse::Insight {
                        key,
                        text,
                        request_id,
                    })
                    .is_err()
                {
                    return;
                }
            }
            InsightRequest::Search { query, request_id } => {
                let text = provider.fetch_insight(&query).await;
                if response_tx
                    .send(InsightResponse::Search { text, request_id })
                    .is_err()
                {
                    return;
                }
            }
            InsightRequest::QuickStats => {
                let facts = provider.quick_stats().await;
                if response_tx.send(InsightResponse::QuickStats(facts)).is_err() {
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
