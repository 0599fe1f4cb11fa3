//! Prefetch scheduler
//!
//! Warms the insight cache for upcoming milestones on a staggered schedule.
//! Requests are issued strictly in catalog order, one at a time, each after
//! a slot-indexed delay; the static spacing is the rate-limit mechanism
//! (open-loop admission control, no backoff). A failed fetch does not abort
//! the rest of the schedule, and once started the scheduler runs to
//! completion.

use std::collections::HashSet;
use std::sync::mpsc::Sender;
use std::time::Duration;

use crate::catalog::Milestone;

use super::insight_state::InsightResponse;
use super::provider::InsightProvider;

/// One-shot start latch for the scheduler. Modeled as an explicit state
/// machine so re-initialization events cannot restart the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefetchPhase {
    #[default]
    NotStarted,
    Running,
    Done,
}

/// A planned prefetch: which milestone, what topic, and how long to wait
/// before issuing the fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefetchSlot {
    pub key: String,
    pub topic: String,
    pub delay: Duration,
}

/// Build the prefetch plan.
///
/// The window covers the `window` catalog entries after the first (the first
/// is resolved by the initial selection). Each slot's delay is
/// `base_delay_ms + slot_index * step_ms`, so delays are monotonically
/// non-decreasing in catalog order. Entries already cached are skipped, and
/// a skipped entry does not shift the delays of the ones after it.
pub fn prefetch_plan(
    catalog: &[Milestone],
    window: usize,
    cached: &HashSet<String>,
    base_delay_ms: u64,
    step_ms: u64,
) -> Vec<PrefetchSlot> {
    catalog
        .iter()
        .skip(1)
        .take(window)
        .enumerate()
        .filter_map(|(slot_index, milestone)| {
            let key = milestone.cache_key();
            if cached.contains(&key) {
                return None;
            }
            Some(PrefetchSlot {
                key,
                topic: milestone.topic(),
                delay: Duration::from_millis(base_delay_ms + slot_index as u64 * step_ms),
            })
        })
        .collect()
}

/// Spawn the scheduler thread.
///
/// Runs the plan on a dedicated thread with its own current-thread tokio
/// runtime (the sleeps and fetches are the only suspension points). Results
/// go back over the shared response channel; the UI thread inserts them into
/// the cache at its poll point.
pub fn spawn_prefetch(
    provider: InsightProvider,
    plan: Vec<PrefetchSlot>,
    response_tx: Sender<InsightResponse>,
) {
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime");
        rt.block_on(prefetch_loop(provider, plan, response_tx));
    });
}

/// Sequential sleep-then-fetch loop: one request in flight at a time.
async fn prefetch_loop(
    provider: InsightProvider,
    plan: Vec<PrefetchSlot>,
    response_tx: Sender<InsightResponse>,
) {
    for slot in plan {
        tokio::time::sleep(slot.delay).await;

        log::debug!("Prefetching insight for {}", slot.key);
        let text = provider.fetch_insight(&slot.topic).await;

        if response_tx
            .send(InsightResponse::Prefetched {
                key: slot.key,
                text,
            })
            .is_err()
        {
            // Main thread disconnected - stop quietly
            return;
        }
    }
    let _ = response_tx.send(InsightResponse::PrefetchDone);
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod scheduler_tests;
