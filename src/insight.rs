//! Insight module
//!
//! Everything between a user selection and displayed insight text: the
//! write-once cache, the staggered prefetch scheduler, the worker thread
//! that talks to the provider, and the selection-flow state with its
//! stale-response guard.

pub mod cache;
pub mod insight_events;
pub mod insight_state;
pub mod prompt;
mod provider;
pub mod scheduler;
pub mod worker;

pub use insight_state::{InsightRequest, InsightResponse, InsightState};
pub use provider::{
    FALLBACK_INSIGHT, GeminiClient, InsightError, InsightProvider, LocalArchive, QUOTA_PREFIX,
    is_error_text,
};
pub use scheduler::PrefetchPhase;
