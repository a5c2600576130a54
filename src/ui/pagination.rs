//! Pagination footer: entry range plus a window of page buttons.

use ratatui::{prelude::*, widgets::Paragraph};

use crate::state::CollectionState;

use super::theme::{COLOR_ACCENT, COLOR_DIM};

/// Render the "Showing X-Y of N entries" line with the page controls.
///
/// The controls only appear once the collection spills past a single
/// page; a short list renders just the entry range.
pub fn render_pagination(frame: &mut Frame, area: Rect, state: &CollectionState) {
    let total = state.items().len();
    let mut spans: Vec<Span> = Vec::new();

    if total == 0 {
        spans.push(Span::styled(
            "Showing 0 entries",
            Style::default().fg(COLOR_DIM),
        ));
    } else {
        spans.push(Span::styled(
            format!(
                "Showing {}-{} of {} entries",
                state.first_visible_index(),
                state.last_visible_index(),
                total
            ),
            Style::default().fg(COLOR_DIM),
        ));
    }

    if total > state.page_size() {
        let current = state.current_page();
        spans.push(Span::raw("   "));
        spans.push(Span::styled("◀ Prev", Style::default().fg(COLOR_DIM)));
        for page in state.page_controls() {
            spans.push(Span::raw(" "));
            if page == current {
                spans.push(Span::styled(
                    format!("[{}]", page),
                    Style::default()
                        .fg(Color::Black)
                        .bg(COLOR_ACCENT)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(
                    format!(" {} ", page),
                    Style::default().fg(COLOR_ACCENT),
                ));
            }
        }
        spans.push(Span::raw(" "));
        spans.push(Span::styled("Next ▶", Style::default().fg(COLOR_DIM)));
    }

    let line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(line, area);
}
