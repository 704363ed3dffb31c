//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Highlight color for focused elements.
pub const HIGHLIGHT: Color = Color::Cyan;

/// Completed task color.
pub const SUCCESS: Color = Color::Green;

/// Delete affordance color.
pub const ERROR: Color = Color::Red;

/// Background of the selected row.
pub const SELECTION_BG: Color = Color::Rgb(40, 40, 60);

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (placeholders, help text).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Highlighted text style (focused panel borders).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Border style for a panel depending on focus.
#[must_use]
pub fn border(focused: bool) -> Style {
    if focused { highlighted() } else { normal() }
}

/// Selected row in the task list.
#[must_use]
pub fn selected_row() -> Style {
    Style::default().bg(SELECTION_BG)
}

/// Checkbox and label of a completed task.
#[must_use]
pub fn completed() -> Style {
    Style::default().fg(SUCCESS)
}

/// The delete affordance at the end of each row.
#[must_use]
pub fn delete_glyph() -> Style {
    Style::default().fg(ERROR)
}

/// Inline edit field (underlined, bright).
#[must_use]
pub fn edit_field() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::UNDERLINED)
}

/// Style for the status bar background (dark background with white foreground).
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}

/// Style for panel titles with a given color (bold).
#[must_use]
pub fn panel_title(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
