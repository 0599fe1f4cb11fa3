//! Interactive terminal browser for Pokémon franchise history.
//!
//! Renders a fixed milestone timeline in a ratatui TUI and enriches each
//! selected era with provider-generated insight text, cached write-once and
//! warmed in the background by a staggered prefetch schedule.

pub mod app;
pub mod catalog;
pub mod config;
pub mod facts;
pub mod insight;
pub mod notification;
pub mod search;
pub mod theme;
pub mod timeline;

#[cfg(test)]
pub mod test_utils;

pub use app::{App, Focus};
pub use config::Config;
