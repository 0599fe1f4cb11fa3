//! Quick-facts panel rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::theme;

use super::facts_state::FactsState;

/// Render the quick-facts grid (two columns, up to four facts).
pub fn render_facts(frame: &mut Frame, area: Rect, facts: &FactsState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::MUTED))
        .title(" Secret Data ");

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !facts.is_loaded() {
        frame.render_widget(
            Paragraph::new("Decrypting archive trivia...")
                .style(Style::default().fg(theme::MUTED)),
            inner,
        );
        return;
    }

    let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    for (index, fact) in facts.visible().iter().enumerate() {
        let column = columns[index % 2];
        let row_height = column.height / 2;
        if row_height == 0 {
            break;
        }
        let cell = Rect {
            x: column.x,
            y: column.y + (index as u16 / 2) * row_height,
            width: column.width,
            height: row_height,
        };

        let lines = vec![
            Line::from(Span::styled(
                format!("● Secret Data #{}", index + 1),
                Style::default().fg(theme::POKEBALL_RED),
            )),
            Line::from(Span::styled(
                fact.as_str(),
                Style::default().fg(theme::CARD_INACTIVE),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), cell);
    }
}
