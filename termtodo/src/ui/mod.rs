//! Terminal UI rendering.
//!
//! [`draw`] renders one frame from the current [`App`] and returns the
//! [`AppLayout`] it used, so mouse clicks can be mapped back to rows.

pub mod input_box;
pub mod status_bar;
pub mod task_list;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    text::Span,
    widgets::Paragraph,
};

use crate::app::App;

/// Columns taken by the checkbox at the start of a row.
pub const CHECKBOX_WIDTH: u16 = 3;

/// Columns at the end of a row that count as the delete affordance.
pub const DELETE_WIDTH: u16 = 2;

/// Screen areas of one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppLayout {
    /// Title line.
    pub title: Rect,
    /// New-task input box, borders included.
    pub input: Rect,
    /// Task list, borders included.
    pub list: Rect,
    /// Status bar.
    pub status: Rect,
}

/// What a mouse position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// The new-task input box.
    Input,
    /// A task row.
    Row {
        /// Index of the task in the list.
        index: usize,
        /// Part of the row.
        target: RowTarget,
    },
    /// Anything else.
    Outside,
}

/// Part of a task row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTarget {
    Checkbox,
    Label,
    Delete,
}

impl AppLayout {
    /// The list area inside its borders.
    #[must_use]
    pub fn list_inner(&self) -> Rect {
        Rect::new(
            self.list.x.saturating_add(1),
            self.list.y.saturating_add(1),
            self.list.width.saturating_sub(2),
            self.list.height.saturating_sub(2),
        )
    }

    /// Number of task rows the list can show.
    #[must_use]
    pub fn list_rows(&self) -> usize {
        usize::from(self.list_inner().height)
    }

    /// Map a screen position to the element under it.
    #[must_use]
    pub fn hit_test(&self, column: u16, row: u16, scroll_offset: usize, task_count: usize) -> Hit {
        if contains(self.input, column, row) {
            return Hit::Input;
        }
        let inner = self.list_inner();
        if !contains(inner, column, row) {
            return Hit::Outside;
        }
        let index = scroll_offset + usize::from(row - inner.y);
        if index >= task_count {
            return Hit::Outside;
        }
        let rel = column - inner.x;
        let target = if rel < CHECKBOX_WIDTH {
            RowTarget::Checkbox
        } else if rel + DELETE_WIDTH >= inner.width {
            RowTarget::Delete
        } else {
            RowTarget::Label
        };
        Hit::Row { index, target }
    }
}

const fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && row >= area.y
        && column - area.x < area.width
        && row - area.y < area.height
}

/// Compute the layout for a terminal area.
///
/// The panel is centered horizontally and capped at `app.panel_width`; the
/// list box is capped at `app.max_visible_rows` rows plus borders.
#[must_use]
pub fn layout(area: Rect, app: &App) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    let (body, status) = (rows[0], rows[1]);

    let column = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(app.panel_width)])
        .flex(Flex::Center)
        .split(body)[0];

    let panel = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                                       // Title
            Constraint::Length(3),                                       // Input
            Constraint::Length(app.max_visible_rows.saturating_add(2)), // Tasks
            Constraint::Min(0),
        ])
        .split(column);

    AppLayout {
        title: panel[0],
        input: panel[1],
        list: panel[2],
        status,
    }
}

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) -> AppLayout {
    let layout = layout(frame.area(), app);

    let title = Paragraph::new(Span::styled("Todo App", theme::panel_title(theme::HIGHLIGHT)))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    input_box::render(frame, layout.input, app);
    task_list::render(frame, layout.list, app);
    status_bar::render(frame, layout.status, app);

    layout
}
