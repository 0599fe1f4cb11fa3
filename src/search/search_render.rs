//! Search box and search result rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::theme;

use super::search_state::SearchState;

/// Render the search input line.
pub fn render_search_input(frame: &mut Frame, area: Rect, search: &SearchState, focused: bool) {
    let border_color = if focused {
        theme::PIKACHU_YELLOW
    } else {
        theme::MUTED
    };

    let title = if search.searching {
        Span::styled(
            " Pikadex Neural Search (searching...) ",
            Style::default().fg(theme::POKEBALL_RED),
        )
    } else {
        Span::raw(" Pikadex Neural Search ")
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title);

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(&search.textarea, inner);
}

/// Render the answer for the last submitted query, when present.
pub fn render_search_result(frame: &mut Frame, area: Rect, search: &SearchState) {
    let Some(ref result) = search.result else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::MUTED))
        .title(" Professor's Answer ");

    let paragraph = Paragraph::new(format!("\"{}\"", result))
        .style(Style::default().fg(theme::CARD_INACTIVE))
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(paragraph, area);
}
