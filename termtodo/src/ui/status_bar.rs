//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Key help for the current focus.
#[must_use]
pub const fn help_text(app: &App) -> &'static str {
    if app.is_editing() {
        return "Enter/Esc: save | Tab: save and switch | ←→: move cursor";
    }
    match app.focus {
        PanelFocus::Input => "Enter: add | Tab: tasks | Esc: quit | ←→: move cursor",
        PanelFocus::List => {
            "Space: toggle | Enter: edit | d: delete | a: add | ↑↓/jk: navigate | q: quit"
        }
    }
}

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let done = app.tasks.completed_count();
    let total = app.tasks.len();

    let status_line = Line::from(vec![
        Span::styled(
            concat!("termtodo v", env!("CARGO_PKG_VERSION")),
            theme::bold(),
        ),
        Span::raw(" | "),
        Span::styled(format!("{done}/{total} done"), theme::normal()),
        Span::raw(" | "),
        Span::styled(help_text(app), theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
