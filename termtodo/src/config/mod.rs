//! Configuration system for `termtodo`.
//!
//! Supports layered configuration with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/termtodo/config.toml`)
//! 4. Compiled defaults
//!
//! Missing config file is not an error (defaults are used). An explicit
//! `--config` path that doesn't exist is an error.

use std::path::PathBuf;
use std::time::Duration;

use termtodo_core::RenamePolicy;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    ui: UiFileConfig,
    tasks: TasksFileConfig,
}

/// `[ui]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct UiFileConfig {
    poll_timeout_ms: Option<u64>,
    max_visible_rows: Option<u16>,
    panel_width: Option<u16>,
    mouse: Option<bool>,
}

/// `[tasks]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct TasksFileConfig {
    reject_empty_rename: Option<bool>,
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// Poll timeout for the TUI event loop.
    pub poll_timeout: Duration,
    /// Height cap of the task list viewport, in rows.
    pub max_visible_rows: u16,
    /// Width of the centered panel, in columns.
    pub panel_width: u16,
    /// Whether mouse capture is enabled.
    pub mouse: bool,
    /// What a rename to blank text does.
    pub rename_policy: RenamePolicy,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(50),
            max_visible_rows: 12,
            panel_width: 48,
            mouse: true,
            rename_policy: RenamePolicy::RejectEmpty,
        }
    }
}

impl TodoConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// If `--config` is given and the file does not exist, returns an error.
    /// Otherwise the default path (`~/.config/termtodo/config.toml`) is tried
    /// and silently ignored if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file cannot be read or parsed.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Ok(Self::resolve(cli, &file))
    }

    /// Resolve a `TodoConfig` from CLI args and a parsed config file.
    ///
    /// Priority: CLI > file > default.
    #[must_use]
    fn resolve(cli: &CliArgs, file: &ConfigFile) -> Self {
        let defaults = Self::default();

        let rename_policy = match file.tasks.reject_empty_rename {
            Some(false) => RenamePolicy::AllowEmpty,
            Some(true) => RenamePolicy::RejectEmpty,
            None => defaults.rename_policy,
        };

        Self {
            poll_timeout: file
                .ui
                .poll_timeout_ms
                .map_or(defaults.poll_timeout, Duration::from_millis),
            max_visible_rows: cli
                .max_visible_rows
                .or(file.ui.max_visible_rows)
                .unwrap_or(defaults.max_visible_rows)
                .max(1),
            panel_width: file.ui.panel_width.unwrap_or(defaults.panel_width),
            mouse: !cli.no_mouse && file.ui.mouse.unwrap_or(defaults.mouse),
            rename_policy,
        }
    }
}

/// CLI arguments parsed by clap.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Terminal todo list")]
pub struct CliArgs {
    /// Path to config file (default: `~/.config/termtodo/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum number of task rows visible before the list scrolls.
    #[arg(long, env = "TERMTODO_MAX_VISIBLE_ROWS")]
    pub max_visible_rows: Option<u16>,

    /// Disable mouse capture (keyboard only).
    #[arg(long, env = "TERMTODO_NO_MOUSE")]
    pub no_mouse: bool,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "TERMTODO_LOG")]
    pub log_level: String,

    /// Path to log file (default: `$TMPDIR/termtodo.log`).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Load and parse a TOML config file.
///
/// If `explicit_path` is `Some`, the file must exist (error if not).
/// If `explicit_path` is `None`, the default path is tried and missing file
/// is treated as empty config.
fn load_config_file(explicit_path: Option<&std::path::Path>) -> Result<ConfigFile, ConfigError> {
    let path = if let Some(p) = explicit_path {
        let contents = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFile {
            path: p.to_path_buf(),
            source: e,
        })?;
        return Ok(toml::from_str(&contents)?);
    } else {
        let Some(config_dir) = dirs::config_dir() else {
            // No config dir available — use defaults.
            return Ok(ConfigFile::default());
        };
        config_dir.join("termtodo").join("config.toml")
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(e) => Err(ConfigError::ReadFile { path, source: e }),
    }
}
