use crate::config::Config;
use crate::facts::FactsState;
use crate::insight::{self, InsightState};
use crate::notification::NotificationState;
use crate::search::SearchState;
use crate::timeline::TimelineState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Timeline,
    Search,
}

pub struct App {
    pub timeline: TimelineState,
    pub insight: InsightState,
    pub search: SearchState,
    pub facts: FactsState,
    pub notification: NotificationState,
    pub focus: Focus,
    pub should_quit: bool,
    dirty: bool,
}

impl App {
    pub fn new(_config: &Config) -> Self {
        Self {
            timeline: TimelineState::new(),
            insight: InsightState::new(),
            search: SearchState::new(),
            facts: FactsState::new(),
            notification: NotificationState::new(),
            focus: Focus::Timeline,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn should_render(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Drain worker and scheduler responses into the owning states.
    /// Called once per event-loop iteration, before rendering.
    pub fn poll_insight_responses(&mut self) {
        let changed = insight::insight_events::poll_responses(
            &mut self.insight,
            &mut self.search,
            &mut self.facts,
            &mut self.notification,
        );
        if changed {
            self.mark_dirty();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::test_app;

    #[test]
    fn test_app_initialization() {
        let app = test_app();

        assert_eq!(app.focus, Focus::Timeline);
        assert_eq!(app.timeline.selected_index, 0);
        assert!(!app.should_quit());
        assert!(app.insight.cache.is_empty());
        assert!(app.should_render());
    }

    #[test]
    fn test_dirty_flag_lifecycle() {
        let mut app = test_app();
        assert!(app.should_render());
        app.clear_dirty();
        assert!(!app.should_render());
        app.mark_dirty();
        assert!(app.should_render());
    }

    #[test]
    fn test_poll_without_channels_is_quiet() {
        let mut app = test_app();
        app.clear_dirty();
        app.poll_insight_responses();
        assert!(!app.should_render());
    }
}
