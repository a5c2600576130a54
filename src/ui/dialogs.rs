//! Modal dialogs: user edit form and delete confirmation.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{Dialog, EditField};
use crate::models::EditDraft;

use super::theme::{
    role_color, status_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_ERROR,
};

/// Centered rect for a modal, clamped to the frame.
pub fn dialog_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Render the open dialog over the dashboard.
pub fn render_dialog(frame: &mut Frame, dialog: &Dialog) {
    match dialog {
        Dialog::EditUser {
            draft,
            focus,
            error,
            submitting,
            ..
        } => render_edit_user(frame, draft, *focus, error.as_deref(), *submitting),
        Dialog::ConfirmDelete { label, .. } => render_confirm_delete(frame, label),
    }
}

fn render_edit_user(
    frame: &mut Frame,
    draft: &EditDraft,
    focus: EditField,
    error: Option<&str>,
    submitting: bool,
) {
    let area = dialog_area(frame.area(), 52, 13);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ACCENT))
        .style(Style::default().bg(COLOR_DIALOG_BG))
        .title(" Edit user ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label_style = |field: EditField| {
        if field == focus {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        }
    };

    let mut lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::styled("Name   ", label_style(EditField::Name)),
            Span::styled(draft.name.as_str(), Style::default().fg(COLOR_ACCENT)),
        ]),
        Line::from(vec![
            Span::styled("Email  ", label_style(EditField::Email)),
            Span::styled(draft.email.as_str(), Style::default().fg(COLOR_ACCENT)),
        ]),
        Line::from(vec![
            Span::styled("Role   ", label_style(EditField::Role)),
            Span::styled("◀ ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                draft.role.as_str(),
                Style::default().fg(role_color(draft.role)),
            ),
            Span::styled(" ▶", Style::default().fg(COLOR_DIM)),
        ]),
        Line::from(vec![
            Span::styled("Status ", label_style(EditField::Status)),
            Span::styled("◀ ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                draft.status.as_str(),
                Style::default().fg(status_color(draft.status)),
            ),
            Span::styled(" ▶", Style::default().fg(COLOR_DIM)),
        ]),
        Line::raw(""),
    ];

    if submitting {
        lines.push(Line::from(Span::styled(
            "Saving...",
            Style::default().fg(COLOR_DIM),
        )));
    } else if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            error,
            Style::default().fg(COLOR_ERROR),
        )));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "[Tab] Next  [◀ ▶] Change  [Enter] Save  [Esc] Cancel",
        Style::default().fg(COLOR_DIM),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn render_confirm_delete(frame: &mut Frame, label: &str) {
    let area = dialog_area(frame.area(), 46, 7);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ERROR))
        .style(Style::default().bg(COLOR_DIALOG_BG))
        .title(" Delete user ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::raw("Delete "),
            Span::styled(
                label.to_string(),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::raw("? This cannot be undone."),
        ])
        .alignment(Alignment::Center),
        Line::raw(""),
        Line::from(Span::styled(
            "[Y] Delete  [N] Cancel",
            Style::default().fg(COLOR_DIM),
        ))
        .alignment(Alignment::Center),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_area_centers_and_clamps() {
        let frame = Rect::new(0, 0, 100, 40);
        let area = dialog_area(frame, 50, 10);
        assert_eq!(area, Rect::new(25, 15, 50, 10));

        // Never larger than the frame.
        let tiny = Rect::new(0, 0, 20, 5);
        let area = dialog_area(tiny, 50, 10);
        assert_eq!(area.width, 20);
        assert_eq!(area.height, 5);
    }
}
