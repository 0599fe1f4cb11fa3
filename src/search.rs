//! Archive search: free-text queries through the insight provider

pub mod search_events;
pub mod search_render;
pub mod search_state;

pub use search_state::SearchState;
