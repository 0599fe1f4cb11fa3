use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::{App, Focus};
use crate::facts::facts_render;
use crate::insight::QUOTA_PREFIX;
use crate::search::search_render;
use crate::theme;
use crate::timeline::timeline_render;

const SEARCH_INPUT_HEIGHT: u16 = 3;
const SEARCH_RESULT_HEIGHT: u16 = 5;
const FACTS_HEIGHT: u16 = 6;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let search_result_height = if self.search.result.is_some() {
            SEARCH_RESULT_HEIGHT
        } else {
            0
        };

        let layout = Layout::vertical([
            Constraint::Min(8),                      // Body takes most of the space
            Constraint::Length(SEARCH_INPUT_HEIGHT), // Search input
            Constraint::Length(search_result_height),
            Constraint::Length(1), // Help line at bottom
        ])
        .split(frame.area());

        let body_area = layout[0];
        let search_area = layout[1];
        let search_result_area = layout[2];
        let help_area = layout[3];

        let body = Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(body_area);

        timeline_render::render_timeline(
            frame,
            body[0],
            &mut self.timeline,
            self.focus == Focus::Timeline,
        );
        self.render_detail_pane(frame, body[1]);

        search_render::render_search_input(
            frame,
            search_area,
            &self.search,
            self.focus == Focus::Search,
        );
        if search_result_height > 0 {
            search_render::render_search_result(frame, search_result_area, &self.search);
        }

        self.render_help_line(frame, help_area);

        // Render last so it overlays the panes
        crate::notification::notification_render::render_notification(
            frame,
            &mut self.notification,
        );
    }

    /// Render the detail pane: selected milestone header, insight text (or
    /// the local description while loading), and the quick-facts grid.
    fn render_detail_pane(&self, frame: &mut Frame, area: Rect) {
        let sections =
            Layout::vertical([Constraint::Min(6), Constraint::Length(FACTS_HEIGHT)]).split(area);

        let milestone = self.timeline.selected();

        let mut title_spans = vec![
            Span::styled(
                format!(" {} ", milestone.year),
                Style::default()
                    .fg(theme::POKEBALL_RED)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(milestone.title),
            Span::raw(" "),
        ];
        if self.insight.loading {
            title_spans.push(Span::styled(
                "SYNCING... ",
                Style::default().fg(theme::POKEBALL_RED),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::MUTED))
            .title(Line::from(title_spans));

        let body = self.detail_body(milestone);
        frame.render_widget(
            Paragraph::new(body).wrap(Wrap { trim: true }).block(block),
            sections[0],
        );

        facts_render::render_facts(frame, sections[1], &self.facts);
    }

    /// Pick the body text for the detail pane.
    ///
    /// A quota sentinel gets the distinct "archive busy" branch; an empty
    /// insight falls back to the milestone's local description.
    fn detail_body(&self, milestone: &crate::catalog::Milestone) -> Vec<Line<'_>> {
        if let Some(rest) = self.insight.insight.strip_prefix(QUOTA_PREFIX) {
            return vec![
                Line::from(Span::styled(
                    "⚡ Archive busy",
                    Style::default()
                        .fg(theme::PIKACHU_YELLOW)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(rest.trim().to_string()),
            ];
        }

        if !self.insight.insight.is_empty() {
            return self
                .insight
                .insight
                .lines()
                .map(|l| Line::from(l.to_string()))
                .collect();
        }

        // Local description shown instantly while the insight loads
        let mut lines = vec![Line::from(Span::styled(
            milestone.description,
            Style::default().fg(theme::PIKACHU_YELLOW),
        ))];
        if !self.insight.loading {
            lines.push(Line::from(Span::styled(
                "Initializing archive data...",
                Style::default().fg(theme::MUTED),
            )));
        }
        lines
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        let help = match self.focus {
            Focus::Timeline => " q quit • ↑/↓ or j/k select era • g/G jump • Tab or / search ",
            Focus::Search => " Enter submit • Esc back to timeline • Ctrl+C quit ",
        };
        frame.render_widget(
            Paragraph::new(help).style(Style::default().fg(theme::MUTED)),
            area,
        );
    }
}
