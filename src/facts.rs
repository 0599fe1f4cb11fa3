//! Quick-facts panel: one-shot trivia list fetched at startup

pub mod facts_render;
pub mod facts_state;

pub use facts_state::FactsState;
