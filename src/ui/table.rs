//! Collection table rendering.
//!
//! Each resource declares its columns with a fallback label for blank
//! cells, matching what the backend leaves unset for partial records.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::Resource;
use crate::models::Record;

use super::theme::{role_color, status_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

/// A table column bound to one record field.
pub struct Column {
    pub header: &'static str,
    pub field: &'static str,
    pub fallback: &'static str,
}

const LEADS_COLUMNS: [Column; 6] = [
    Column { header: "Business", field: "storeName", fallback: "Unnamed Business" },
    Column { header: "Vendor", field: "vendorId", fallback: "No vendor" },
    Column { header: "Phone", field: "phone", fallback: "No phone" },
    Column { header: "Rating", field: "stars", fallback: "N/A" },
    Column { header: "Category", field: "projectCategory", fallback: "-" },
    Column { header: "City", field: "city", fallback: "-" },
];

const PROJECTS_COLUMNS: [Column; 6] = [
    Column { header: "Project", field: "projectName", fallback: "-" },
    Column { header: "Vendor", field: "vendorId", fallback: "-" },
    Column { header: "Category", field: "businessCategory", fallback: "-" },
    Column { header: "Status", field: "status", fallback: "-" },
    Column { header: "City", field: "city", fallback: "-" },
    Column { header: "Created", field: "createdAt", fallback: "-" },
];

const USERS_COLUMNS: [Column; 5] = [
    Column { header: "Username", field: "username", fallback: "-" },
    Column { header: "Name", field: "name", fallback: "-" },
    Column { header: "Email", field: "email", fallback: "-" },
    Column { header: "Role", field: "role", fallback: "user" },
    Column { header: "Status", field: "status", fallback: "inactive" },
];

/// Columns for one resource's table.
pub fn columns(resource: Resource) -> &'static [Column] {
    match resource {
        Resource::Leads => &LEADS_COLUMNS,
        Resource::Projects => &PROJECTS_COLUMNS,
        Resource::Users => &USERS_COLUMNS,
    }
}

/// Truncate a cell value to fit its column, appending an ellipsis.
pub fn fit(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

fn cell_style(resource: Resource, column: &Column, value: &str) -> Style {
    if resource != Resource::Users {
        return Style::default();
    }
    match column.field {
        "role" => crate::models::Role::parse(value)
            .map(|r| Style::default().fg(role_color(r)))
            .unwrap_or_default(),
        "status" => crate::models::Status::parse(value)
            .map(|s| Style::default().fg(status_color(s)))
            .unwrap_or_default(),
        _ => Style::default(),
    }
}

/// Render the visible page of a collection as a table.
pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    resource: Resource,
    rows: &[Record],
    selected: usize,
) {
    let cols = columns(resource);
    let col_width = (area.width.saturating_sub(4) as usize / cols.len()).max(4);

    let header = Row::new(
        cols.iter()
            .map(|c| Cell::from(c.header))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().add_modifier(Modifier::BOLD).fg(COLOR_ACCENT))
    .bottom_margin(1);

    let body = rows.iter().enumerate().map(|(i, record)| {
        let cells = cols.iter().map(|col| {
            let value = record.display(col.field, col.fallback);
            let style = cell_style(resource, col, &value);
            Cell::from(fit(&value, col_width)).style(style)
        });
        let row = Row::new(cells.collect::<Vec<_>>());
        if i == selected {
            row.style(
                Style::default()
                    .fg(Color::Black)
                    .bg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            row
        }
    });

    let widths = cols
        .iter()
        .map(|_| Constraint::Ratio(1, cols.len() as u32))
        .collect::<Vec<_>>();

    let table = Table::new(body, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(resource.title()),
        )
        .column_spacing(1)
        .style(Style::default().fg(Color::Gray));

    frame.render_widget(table, area);

    if rows.is_empty() {
        let empty = Paragraph::new(format!("No {} found", resource.noun()))
            .style(Style::default().fg(COLOR_DIM))
            .alignment(Alignment::Center);
        let inner = area.inner(Margin::new(2, 2));
        frame.render_widget(empty, inner);
    }
}
