//! Sign-in screen rendering.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{App, LoginField};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};

const LOGO: &str = "O P S D E S K";

/// Render the centered sign-in card.
pub fn render_login_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer, area);

    let card_width = 46.min(area.width.saturating_sub(4));
    let card_height = 12.min(area.height.saturating_sub(2));
    let card = Rect::new(
        area.x + (area.width.saturating_sub(card_width)) / 2,
        area.y + (area.height.saturating_sub(card_height)) / 2,
        card_width,
        card_height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Sign in ");
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let masked: String = "•".repeat(app.login.password.chars().count());
    let field_style = |focused: bool| {
        if focused {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        }
    };

    let mut lines = vec![
        Line::from(Span::styled(
            LOGO,
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Email    ", field_style(app.login.focus == LoginField::Email)),
            Span::styled(app.login.email.as_str(), Style::default().fg(COLOR_ACCENT)),
            cursor_span(app.login.focus == LoginField::Email),
        ]),
        Line::from(vec![
            Span::styled("Password ", field_style(app.login.focus == LoginField::Password)),
            Span::styled(masked, Style::default().fg(COLOR_ACCENT)),
            cursor_span(app.login.focus == LoginField::Password),
        ]),
        Line::raw(""),
    ];

    if app.login.submitting {
        lines.push(
            Line::from(Span::styled(
                "Signing in...",
                Style::default().fg(COLOR_DIM),
            ))
            .alignment(Alignment::Center),
        );
    } else if let Some(error) = &app.login.error {
        lines.push(
            Line::from(Span::styled(
                error.as_str(),
                Style::default().fg(COLOR_ERROR),
            ))
            .alignment(Alignment::Center),
        );
    }

    lines.push(Line::raw(""));
    lines.push(
        Line::from(Span::styled(
            "[Tab] Switch field  [Enter] Sign in  [Ctrl+C] Quit",
            Style::default().fg(COLOR_DIM),
        ))
        .alignment(Alignment::Center),
    );

    frame.render_widget(Paragraph::new(lines), inner);
}

fn cursor_span(focused: bool) -> Span<'static> {
    if focused {
        Span::styled("▏", Style::default().fg(COLOR_ACCENT))
    } else {
        Span::raw("")
    }
}
