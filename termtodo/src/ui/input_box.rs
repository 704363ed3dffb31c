//! New-task input box rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the input box.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Input && !app.is_editing();
    let width = usize::from(area.width.saturating_sub(2));

    let input_line = if app.input.is_empty() && !is_focused {
        Line::from(Span::styled("Add your task", theme::dimmed()))
    } else if is_focused {
        Line::from(Span::styled(app.input.window(width), theme::normal()))
    } else {
        Line::from(Span::styled(app.input.value(), theme::normal()))
    };

    let block = Block::default()
        .title("New task")
        .borders(Borders::ALL)
        .border_style(theme::border(is_focused));

    let paragraph = Paragraph::new(input_line).block(block);

    frame.render_widget(paragraph, area);
}
