//! `termtodo` — in-memory todo list in the terminal.

pub mod app;
pub mod config;
pub mod field;
pub mod ui;
