//! Timeline sidebar rendering
//!
//! Draws the milestone cards: year, generation badge, title, and the first
//! couple of tags, with the active card highlighted.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::theme;

use super::timeline_state::TimelineState;

/// Rows used per milestone card (year line, title line, tag line).
const CARD_HEIGHT: usize = 3;

pub fn render_timeline(frame: &mut Frame, area: Rect, timeline: &mut TimelineState, focused: bool) {
    let border_color = if focused {
        theme::PIKACHU_YELLOW
    } else {
        theme::MUTED
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Archive Timeline ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible_cards = (inner.height as usize / CARD_HEIGHT).max(1);
    timeline.scroll_to_selected(visible_cards);

    let mut lines: Vec<Line> = Vec::new();
    for (index, milestone) in timeline
        .entries()
        .iter()
        .enumerate()
        .skip(timeline.offset)
        .take(visible_cards)
    {
        let active = index == timeline.selected_index;

        let year_style = if active {
            Style::default()
                .fg(theme::POKEBALL_RED)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::MUTED)
        };

        let mut header = vec![Span::styled(milestone.year, year_style)];
        if let Some(generation) = milestone.generation {
            header.push(Span::raw("  "));
            header.push(Span::styled(
                generation,
                Style::default().fg(if active {
                    theme::PIKACHU_YELLOW
                } else {
                    theme::MUTED
                }),
            ));
        }
        lines.push(Line::from(header));

        let title_style = if active {
            Style::default()
                .fg(theme::ARCHIVE_TEXT)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(theme::CARD_INACTIVE)
        };
        lines.push(Line::from(Span::styled(
            format!(" {} ", milestone.title),
            title_style,
        )));

        let tags = milestone
            .tags
            .iter()
            .take(2)
            .map(|t| format!("[{}]", t))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(Span::styled(
            tags,
            Style::default().fg(theme::MUTED),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
