//! Color theme constants for the opsdesk UI
//!
//! Defines the minimal dark palette used throughout the console.

use ratatui::style::Color;

use crate::models::{Role, Status};

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and the selected row
pub const COLOR_ACCENT: Color = Color::White;

/// Header and tab-bar text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for hints and secondary info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Error banners and failed states
pub const COLOR_ERROR: Color = Color::Red;

/// Success and active states
pub const COLOR_OK: Color = Color::LightGreen;

/// Suspended/warning states
pub const COLOR_WARN: Color = Color::Yellow;

/// Background for modal dialogs
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

// ============================================================================
// Badge Colors
// ============================================================================

/// Color for a user's role badge.
pub fn role_color(role: Role) -> Color {
    match role {
        Role::Admin => Color::LightMagenta,
        Role::Editor => Color::LightBlue,
        Role::User => Color::Gray,
    }
}

/// Color for a user's status badge.
pub fn status_color(status: Status) -> Color {
    match status {
        Status::Active => COLOR_OK,
        Status::Inactive => COLOR_DIM,
        Status::Suspended => COLOR_WARN,
    }
}
