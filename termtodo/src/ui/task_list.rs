//! Task list rendering.
//!
//! One row per task in insertion order: checkbox, label or inline edit field,
//! and the delete affordance pinned to the right edge.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use termtodo_core::Task;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{CHECKBOX_WIDTH, DELETE_WIDTH, theme};
use crate::app::{App, PanelFocus};

/// Shown in place of rows when the list is empty.
pub const EMPTY_PLACEHOLDER: &str = "No tasks added yet";

/// Glyph of the delete affordance.
pub const DELETE_GLYPH: &str = "✗";

/// Render the task list viewport.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::List;
    let rows = usize::from(area.height.saturating_sub(2));
    let width = area.width.saturating_sub(2);

    let block = Block::default()
        .title(title(app, rows))
        .borders(Borders::ALL)
        .border_style(theme::border(is_focused));

    if app.tasks.is_empty() {
        let placeholder = Paragraph::new(Span::styled(EMPTY_PLACEHOLDER, theme::dimmed()))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = app
        .tasks
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(rows)
        .map(|(index, task)| {
            let item = ListItem::new(row_line(task, app, width));
            if is_focused && index == app.selected {
                item.style(theme::selected_row())
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Panel title, with the visible range once the list overflows.
fn title(app: &App, rows: usize) -> String {
    let total = app.tasks.len();
    if total <= rows || rows == 0 {
        return "Tasks".to_string();
    }
    let first = app.scroll_offset + 1;
    let last = (app.scroll_offset + rows).min(total);
    format!("Tasks {first}-{last} of {total}")
}

/// Build the line for one task, `width` columns wide.
#[must_use]
pub fn row_line(task: &Task, app: &App, width: u16) -> Line<'static> {
    let style = if task.completed {
        theme::completed()
    } else {
        theme::normal()
    };
    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    let label_width = usize::from(width.saturating_sub(CHECKBOX_WIDTH + 1 + DELETE_WIDTH));

    let body = if app.tasks.is_editing(&task.id) {
        Span::styled(app.edit.window(label_width), theme::edit_field())
    } else {
        Span::styled(truncate(&task.text, label_width), style)
    };

    let used = usize::from(CHECKBOX_WIDTH) + 1 + body.width();
    let pad = usize::from(width).saturating_sub(used + 1);

    Line::from(vec![
        Span::styled(checkbox, style),
        Span::raw(" "),
        body,
        Span::raw(" ".repeat(pad)),
        Span::styled(DELETE_GLYPH, theme::delete_glyph()),
    ])
}

/// Cut `text` to `max` columns, marking the cut with an ellipsis.
fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut = String::new();
    let mut used = 0;
    for c in text.chars() {
        let width = c.width().unwrap_or(0);
        if used + width > max - 1 {
            break;
        }
        cut.push(c);
        used += width;
    }
    cut.push('…');
    cut
}
