//! Terminal UI rendering.
//!
//! Pure view layer: every function takes the frame and the app state and
//! draws. No state is mutated during rendering.

pub mod dialogs;
pub mod login;
pub mod pagination;
pub mod table;
pub mod theme;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::api::Resource;
use crate::app::{App, Screen};
use crate::state::Phase;

use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};

/// Draw the whole frame.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Login => login::render_login_screen(frame, app),
        Screen::Dashboard => render_dashboard(frame, app),
    }
    if let Some(dialog) = &app.dialog {
        dialogs::render_dialog(frame, dialog);
    }
}

fn render_dashboard(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(5),    // Table
            Constraint::Length(1), // Pagination
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_tabs(frame, chunks[0], app);
    render_body(frame, chunks[1], app);
    pagination::render_pagination(frame, chunks[2], app.active_collection());
    render_footer(frame, chunks[3], app);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = vec![Span::styled(
        " opsdesk ",
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];
    for (i, resource) in Resource::ALL.into_iter().enumerate() {
        spans.push(Span::raw("  "));
        let label = format!("[{}] {}", i + 1, resource.title());
        if resource == app.active {
            spans.push(Span::styled(
                label,
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label, Style::default().fg(COLOR_DIM)));
        }
    }
    if let Some(auth) = app.auth() {
        let name = auth.user().display_name().to_string();
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let pad = (area.width as usize).saturating_sub(used + name.len() + 1);
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(name, Style::default().fg(COLOR_DIM)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.active_collection();
    match state.phase() {
        Phase::Idle | Phase::Loading => {
            render_panel(
                frame,
                area,
                app.active,
                &format!("Loading {}...", app.active.noun()),
                COLOR_DIM,
            );
        }
        Phase::Failed => {
            let message = state
                .error_message()
                .unwrap_or("Something went wrong")
                .to_string();
            render_panel(
                frame,
                area,
                app.active,
                &format!("{}\n\n[r] Retry", message),
                COLOR_ERROR,
            );
        }
        Phase::Ready => {
            table::render_table(frame, area, app.active, state.visible(), app.selected);
        }
    }
}

fn render_panel(frame: &mut Frame, area: Rect, resource: Resource, text: &str, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(resource.title());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let centered = Rect::new(
        inner.x,
        inner.y + inner.height / 2,
        inner.width,
        inner.height.saturating_sub(inner.height / 2).max(1),
    );
    let para = Paragraph::new(text.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(para, centered);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.active_collection();

    // A failed delete has nowhere else to surface; edits show their
    // error inside the dialog.
    if app.dialog.is_none() {
        if let Some(error) = state.mutation_error() {
            let line = Paragraph::new(Span::styled(error, Style::default().fg(COLOR_ERROR)));
            frame.render_widget(line, area);
            return;
        }
    }

    let mut hints = vec!["[Tab] Switch", "[↑↓] Select", "[←→] Page", "[r] Refresh"];
    if app.active.supports_mutation() {
        hints.push("[e] Edit");
        hints.push("[d] Delete");
    }
    hints.push("[o] Sign out");
    hints.push("[q] Quit");

    let text = if state.is_submitting() {
        "Saving...".to_string()
    } else {
        hints.join("  ")
    };
    let line = Paragraph::new(Span::styled(text, Style::default().fg(COLOR_DIM)));
    frame.render_widget(line, area);
}
