//! Application state and event handling.
//!
//! `App` owns the current [`TaskList`] snapshot and the transient view state
//! (focus, text fields, selection, scroll). Every gesture maps to at most one
//! task list operation whose result replaces the snapshot.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use termtodo_core::{RenamePolicy, Task, TaskId, TaskList};

use crate::config::TodoConfig;
use crate::field::TextField;
use crate::ui::{AppLayout, Hit, RowTarget};

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// New-task input box is focused (default).
    Input,
    /// Task list is focused.
    List,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Current task list snapshot.
    pub tasks: TaskList,
    /// New-task input.
    pub input: TextField,
    /// Edit field of the task in rename mode. Meaningless when nothing is edited.
    pub edit: TextField,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Selected row in the task list.
    pub selected: usize,
    /// Index of the first visible row.
    pub scroll_offset: usize,
    /// Rows the list viewport currently shows.
    pub visible_rows: usize,
    /// Height cap of the list viewport.
    pub max_visible_rows: u16,
    /// Width of the centered panel.
    pub panel_width: u16,
    /// What a rename to blank text does.
    pub rename_policy: RenamePolicy,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create an app with an empty list and default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&TodoConfig::default())
    }

    /// Create an app with an empty list using the given settings.
    #[must_use]
    pub fn from_config(config: &TodoConfig) -> Self {
        Self {
            tasks: TaskList::new(),
            input: TextField::new(),
            edit: TextField::new(),
            focus: PanelFocus::Input,
            selected: 0,
            scroll_offset: 0,
            visible_rows: usize::from(config.max_visible_rows.max(1)),
            max_visible_rows: config.max_visible_rows,
            panel_width: config.panel_width,
            rename_policy: config.rename_policy,
            should_quit: false,
        }
    }

    /// The task under the list selection.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.tasks().get(self.selected)
    }

    /// Whether a task is in rename mode.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.tasks.editing_id().is_some()
    }

    /// Record how many rows the list viewport actually has.
    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.visible_rows = rows.max(1);
        self.ensure_selected_visible();
    }

    // -----------------------------------------------------------------------
    // Task operations
    // -----------------------------------------------------------------------

    /// Submit the input box as a new task. Blank input is left in place.
    pub fn submit(&mut self) {
        let next = self.tasks.add(self.input.value());
        if next.shares_tasks_with(&self.tasks) {
            return;
        }
        self.input.take();
        if let Some(task) = next.tasks().last() {
            tracing::debug!(task_id = %task.id, "task added");
        }
        self.tasks = next;
    }

    /// Flip the completion flag of a task.
    pub fn toggle(&mut self, id: &TaskId) {
        let next = self.tasks.toggle(id);
        if !next.shares_tasks_with(&self.tasks) {
            tracing::debug!(task_id = %id, "task toggled");
        }
        self.tasks = next;
    }

    /// Put a task into rename mode with its text in the edit field.
    ///
    /// An edit already in progress is committed first, as its field blurs.
    pub fn start_edit(&mut self, id: &TaskId) {
        self.commit_edit();
        let Some(text) = self.tasks.get(id).map(|t| t.text.clone()) else {
            return;
        };
        self.tasks = self.tasks.start_edit(id);
        self.edit = TextField::with_value(&text);
        self.focus = PanelFocus::List;
        if let Some(index) = self.tasks.position(id) {
            self.select(index);
        }
    }

    /// Commit the edit field to the task in rename mode, if any.
    pub fn commit_edit(&mut self) {
        let Some(id) = self.tasks.editing_id().cloned() else {
            return;
        };
        let text = self.edit.take();
        let next = self
            .tasks
            .finish_edit_with(&id, &text, self.rename_policy);
        if !next.shares_tasks_with(&self.tasks) {
            tracing::debug!(task_id = %id, "task renamed");
        }
        self.tasks = next;
    }

    /// Delete a task.
    pub fn remove(&mut self, id: &TaskId) {
        let was_editing = self.tasks.is_editing(id);
        let next = self.tasks.remove(id);
        if next.shares_tasks_with(&self.tasks) {
            return;
        }
        tracing::debug!(task_id = %id, "task removed");
        if was_editing {
            self.edit.take();
        }
        self.tasks = next;
        self.select(self.selected.min(self.tasks.len().saturating_sub(1)));
    }

    // -----------------------------------------------------------------------
    // Keyboard
    // -----------------------------------------------------------------------

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.is_editing() {
            self.handle_edit_key(key);
            return;
        }

        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            self.switch_focus();
            return;
        }

        match self.focus {
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::List => self.handle_list_key(key),
        }
    }

    /// Handle key event when the new-task input is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => self.input.insert(c),
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            _ => {}
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select(self.selected.saturating_sub(1)),
            KeyCode::Down | KeyCode::Char('j') => self.select(self.selected + 1),
            KeyCode::Home | KeyCode::Char('g') => self.select(0),
            KeyCode::End | KeyCode::Char('G') => self.select(usize::MAX),
            KeyCode::Char(' ' | 'x') => {
                if let Some(id) = self.selected_id() {
                    self.toggle(&id);
                }
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                if let Some(id) = self.selected_id() {
                    self.start_edit(&id);
                }
            }
            KeyCode::Delete | KeyCode::Char('d') => {
                if let Some(id) = self.selected_id() {
                    self.remove(&id);
                }
            }
            KeyCode::Char('a') => self.focus = PanelFocus::Input,
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    /// Handle key event while a task's edit field has focus.
    ///
    /// Anything that moves focus away blurs the field, which commits it.
    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.commit_edit(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.commit_edit();
                self.switch_focus();
            }
            KeyCode::Up => {
                self.commit_edit();
                self.select(self.selected.saturating_sub(1));
            }
            KeyCode::Down => {
                self.commit_edit();
                self.select(self.selected + 1);
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit.insert(c);
            }
            KeyCode::Backspace => self.edit.backspace(),
            KeyCode::Delete => self.edit.delete(),
            KeyCode::Left => self.edit.move_left(),
            KeyCode::Right => self.edit.move_right(),
            KeyCode::Home => self.edit.move_home(),
            KeyCode::End => self.edit.move_end(),
            _ => {}
        }
    }

    // -----------------------------------------------------------------------
    // Mouse
    // -----------------------------------------------------------------------

    /// Handle a mouse event against the layout of the last drawn frame.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent, layout: &AppLayout) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.click(mouse.column, mouse.row, layout),
            MouseEventKind::ScrollUp => {
                self.commit_edit();
                self.scroll_by(-1);
            }
            MouseEventKind::ScrollDown => {
                self.commit_edit();
                self.scroll_by(1);
            }
            _ => {}
        }
    }

    fn click(&mut self, column: u16, row: u16, layout: &AppLayout) {
        match layout.hit_test(column, row, self.scroll_offset, self.tasks.len()) {
            Hit::Input => {
                self.commit_edit();
                self.focus = PanelFocus::Input;
            }
            Hit::Row { index, target } => {
                let id = self.tasks.tasks()[index].id.clone();
                // Clicking inside the open edit field keeps it open.
                if target == RowTarget::Label && self.tasks.is_editing(&id) {
                    return;
                }
                self.commit_edit();
                self.focus = PanelFocus::List;
                self.select(index);
                match target {
                    RowTarget::Checkbox => self.toggle(&id),
                    RowTarget::Label => self.start_edit(&id),
                    RowTarget::Delete => self.remove(&id),
                }
            }
            Hit::Outside => self.commit_edit(),
        }
    }

    // -----------------------------------------------------------------------
    // Selection and scrolling
    // -----------------------------------------------------------------------

    fn selected_id(&self) -> Option<TaskId> {
        self.selected_task().map(|t| t.id.clone())
    }

    const fn switch_focus(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::List,
            PanelFocus::List => PanelFocus::Input,
        };
    }

    /// Select a row, clamped to the list, and scroll it into view.
    fn select(&mut self, index: usize) {
        self.selected = index.min(self.tasks.len().saturating_sub(1));
        self.ensure_selected_visible();
    }

    /// Move the viewport, dragging the selection along if it falls out.
    fn scroll_by(&mut self, delta: isize) {
        let max_offset = self.tasks.len().saturating_sub(self.visible_rows);
        self.scroll_offset = self
            .scroll_offset
            .saturating_add_signed(delta)
            .min(max_offset);
        let last_visible = self.scroll_offset + self.visible_rows - 1;
        self.selected = self.selected.clamp(self.scroll_offset, last_visible);
        self.selected = self.selected.min(self.tasks.len().saturating_sub(1));
    }

    fn ensure_selected_visible(&mut self) {
        let rows = self.visible_rows.max(1);
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + rows {
            self.scroll_offset = self.selected + 1 - rows;
        }
        self.scroll_offset = self
            .scroll_offset
            .min(self.tasks.len().saturating_sub(rows));
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
