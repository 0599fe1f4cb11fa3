//! Timeline sidebar: milestone list with selection

pub mod timeline_events;
pub mod timeline_render;
pub mod timeline_state;

pub use timeline_state::TimelineState;
