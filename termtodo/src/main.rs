//! `termtodo` — in-memory todo list in the terminal.
//!
//! Launches the TUI with an empty list. Nothing is saved: the list is gone
//! when the program exits. Configuration via CLI flags, environment variables,
//! or config file (`~/.config/termtodo/config.toml`).
//!
//! ```bash
//! cargo run --bin termtodo
//!
//! # Keyboard only, short viewport, debug logging
//! cargo run --bin termtodo -- --no-mouse --max-visible-rows 5 --log-level debug
//! ```

use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking::WorkerGuard;

use termtodo::app::App;
use termtodo::config::{CliArgs, TodoConfig};
use termtodo::ui::{self, AppLayout};

fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > env > config file > defaults).
    let config = match TodoConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config file: {e}");
            TodoConfig::default()
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!(
        max_visible_rows = config.max_visible_rows,
        mouse = config.mouse,
        "termtodo starting"
    );

    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app.
    let result = run_app(&mut terminal, &config);

    // Restore terminal.
    disable_raw_mode()?;
    if config.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "termtodo exiting after terminal error");
    } else {
        tracing::info!("termtodo exiting");
    }
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the terminal).
/// Returns a [`WorkerGuard`] that must be held until shutdown to ensure all
/// buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("termtodo.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Main application loop: draw, wait for one event, apply it.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &TodoConfig,
) -> io::Result<()> {
    let mut app = App::from_config(config);
    let mut layout = AppLayout::default();

    loop {
        // Step 1: Draw the UI frame and keep its layout for hit-testing.
        terminal.draw(|frame| layout = ui::draw(frame, &app))?;
        app.set_viewport_rows(layout.list_rows());

        // Step 2: Poll for terminal input events.
        if event::poll(config.poll_timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key_event(key);
                }
                Event::Mouse(mouse) => app.handle_mouse_event(mouse, &layout),
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
