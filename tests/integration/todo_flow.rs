//! Integration tests for keyboard-driven task list use.
//!
//! Drives `App` with key events the way the event loop does and checks the
//! resulting task list snapshot:
//! - submit adds, blank submit is ignored
//! - Space toggles, Enter/e edits, d deletes the selected row
//! - any focus move while editing commits the field
//! - the add/toggle/remove walkthrough ends with the expected list

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use termtodo::app::{App, PanelFocus};
use termtodo::config::TodoConfig;
use termtodo_core::RenamePolicy;

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, text: &str) {
    text.chars().for_each(|c| press(app, KeyCode::Char(c)));
}

/// Types `text` into the input box and submits it.
fn add(app: &mut App, text: &str) {
    type_str(app, text);
    press(app, KeyCode::Enter);
}

fn texts(app: &App) -> Vec<String> {
    app.tasks.iter().map(|t| t.text.clone()).collect()
}

fn completed(app: &App) -> Vec<bool> {
    app.tasks.iter().map(|t| t.completed).collect()
}

/// Moves focus to the list and selects row `index`.
fn select_row(app: &mut App, index: usize) {
    if app.focus != PanelFocus::List {
        press(app, KeyCode::Tab);
    }
    press(app, KeyCode::Home);
    for _ in 0..index {
        press(app, KeyCode::Down);
    }
}

// =============================================================================
// Adding
// =============================================================================

#[test]
fn new_app_is_empty() {
    let app = App::new();
    assert!(app.tasks.is_empty());
    assert_eq!(app.focus, PanelFocus::Input);
    assert!(!app.is_editing());
}

#[test]
fn empty_and_blank_submissions_are_ignored() {
    let mut app = App::new();
    press(&mut app, KeyCode::Enter);
    add(&mut app, "   ");
    assert!(app.tasks.is_empty());
}

#[test]
fn submit_appends_incomplete_task() {
    let mut app = App::new();
    add(&mut app, "buy milk");
    assert_eq!(texts(&app), vec!["buy milk"]);
    assert_eq!(completed(&app), vec![false]);
    assert!(app.input.is_empty());
}

#[test]
fn input_cursor_editing_before_submit() {
    let mut app = App::new();
    type_str(&mut app, "by milk");
    press(&mut app, KeyCode::Home);
    press(&mut app, KeyCode::Right);
    type_str(&mut app, "u");
    press(&mut app, KeyCode::End);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Enter);
    assert_eq!(texts(&app), vec!["buy mil"]);
}

// =============================================================================
// Toggling and removing
// =============================================================================

#[test]
fn space_toggles_selected_row_twice() {
    let mut app = App::new();
    add(&mut app, "a");
    add(&mut app, "b");
    select_row(&mut app, 1);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(completed(&app), vec![false, true]);
    press(&mut app, KeyCode::Char('x'));
    assert_eq!(completed(&app), vec![false, false]);
}

#[test]
fn toggle_on_empty_list_is_noop() {
    let mut app = App::new();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('d'));
    assert!(app.tasks.is_empty());
}

#[test]
fn delete_removes_selected_row() {
    let mut app = App::new();
    add(&mut app, "a");
    add(&mut app, "b");
    add(&mut app, "c");
    select_row(&mut app, 1);
    let removed = app.selected_task().unwrap().id.clone();
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(texts(&app), vec!["a", "c"]);
    assert!(app.tasks.get(&removed).is_none());
}

// =============================================================================
// Editing
// =============================================================================

#[test]
fn enter_on_row_opens_prefilled_edit_field() {
    let mut app = App::new();
    add(&mut app, "draft");
    select_row(&mut app, 0);
    press(&mut app, KeyCode::Enter);
    assert!(app.is_editing());
    assert_eq!(app.edit.value(), "draft");
}

#[test]
fn enter_in_edit_field_renames_trimmed() {
    let mut app = App::new();
    add(&mut app, "old");
    select_row(&mut app, 0);
    press(&mut app, KeyCode::Char('e'));
    for _ in 0..3 {
        press(&mut app, KeyCode::Backspace);
    }
    type_str(&mut app, "  new text  ");
    press(&mut app, KeyCode::Enter);
    assert_eq!(texts(&app), vec!["new text"]);
    assert!(!app.is_editing());
}

#[test]
fn esc_in_edit_field_commits_instead_of_quitting() {
    let mut app = App::new();
    add(&mut app, "walk");
    select_row(&mut app, 0);
    press(&mut app, KeyCode::Enter);
    type_str(&mut app, " dog");
    press(&mut app, KeyCode::Esc);
    assert!(!app.should_quit);
    assert_eq!(texts(&app), vec!["walk dog"]);
}

#[test]
fn moving_selection_blurs_and_commits() {
    let mut app = App::new();
    add(&mut app, "a");
    add(&mut app, "b");
    select_row(&mut app, 0);
    press(&mut app, KeyCode::Enter);
    type_str(&mut app, "1");
    press(&mut app, KeyCode::Down);
    assert!(!app.is_editing());
    assert_eq!(texts(&app), vec!["a1", "b"]);
    assert_eq!(app.selected, 1);
}

#[test]
fn tab_blurs_commits_and_switches_focus() {
    let mut app = App::new();
    add(&mut app, "a");
    select_row(&mut app, 0);
    press(&mut app, KeyCode::Enter);
    type_str(&mut app, "!");
    press(&mut app, KeyCode::Tab);
    assert_eq!(texts(&app), vec!["a!"]);
    assert_eq!(app.focus, PanelFocus::Input);
}

#[test]
fn edit_cycle_without_changes_is_idempotent() {
    let mut app = App::new();
    add(&mut app, "same");
    let before = app.tasks.clone();
    select_row(&mut app, 0);
    for _ in 0..3 {
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
    }
    assert_eq!(app.tasks, before);
    assert!(app.tasks.shares_tasks_with(&before));
}

#[test]
fn blank_rename_is_rejected_by_default() {
    let mut app = App::new();
    add(&mut app, "keep");
    select_row(&mut app, 0);
    press(&mut app, KeyCode::Enter);
    for _ in 0..4 {
        press(&mut app, KeyCode::Backspace);
    }
    press(&mut app, KeyCode::Enter);
    assert_eq!(texts(&app), vec!["keep"]);
}

#[test]
fn blank_rename_allowed_when_configured() {
    let config = TodoConfig {
        rename_policy: RenamePolicy::AllowEmpty,
        ..TodoConfig::default()
    };
    let mut app = App::from_config(&config);
    add(&mut app, "gone");
    select_row(&mut app, 0);
    press(&mut app, KeyCode::Enter);
    for _ in 0..4 {
        press(&mut app, KeyCode::Backspace);
    }
    type_str(&mut app, "  ");
    press(&mut app, KeyCode::Enter);
    assert_eq!(texts(&app), vec![""]);
}

// =============================================================================
// Quitting
// =============================================================================

#[test]
fn esc_in_input_quits() {
    let mut app = App::new();
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit);
}

#[test]
fn q_in_input_is_text() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit);
    assert_eq!(app.input.value(), "q");
}

#[test]
fn q_in_list_quits() {
    let mut app = App::new();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

// =============================================================================
// Walkthrough
// =============================================================================

#[test]
fn add_toggle_remove_walkthrough() {
    let mut app = App::new();
    add(&mut app, "a");
    add(&mut app, "b");
    assert_eq!(texts(&app), vec!["a", "b"]);
    assert_eq!(completed(&app), vec![false, false]);

    select_row(&mut app, 0);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(completed(&app), vec![true, false]);

    select_row(&mut app, 1);
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(texts(&app), vec!["a"]);
    assert_eq!(completed(&app), vec![true]);

    // Back to the input box to keep adding.
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.focus, PanelFocus::Input);
    add(&mut app, "c");
    assert_eq!(texts(&app), vec!["a", "c"]);
}
