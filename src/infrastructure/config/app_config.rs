//! Application configuration.

use crate::domain::ScreenId;
use crate::domain::keybinding::Action;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

pub(super) const APP_NAME: &str = "stackview";
pub(super) const APP_QUALIFIER: &str = "com";
pub(super) const APP_ORGANIZATION: &str = "stackview";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Directive understood by `EnvFilter`.
    #[must_use]
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_directive())
    }
}

/// Application configuration, read from `config.toml` and overridden by CLI flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Enable mouse support.
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Screen placed at the bottom of the navigation stack.
    #[serde(default)]
    pub initial_screen: ScreenId,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Custom keybindings, e.g. `"Ctrl+q" = "Quit"`.
    #[serde(default)]
    pub keybindings: HashMap<String, Action>,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,

    /// Show the route trail in the header.
    #[serde(default = "default_true")]
    pub show_trail: bool,

    /// Show a scrollbar beside the row list.
    #[serde(default = "default_true")]
    pub show_scrollbar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
            show_trail: true,
            show_scrollbar: true,
        }
    }
}

fn default_accent_color() -> String {
    "Cyan".to_string()
}

fn default_true() -> bool {
    true
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(mouse) = args.mouse {
            self.mouse = mouse;
        }
        if let Some(initial_screen) = args.initial_screen {
            self.initial_screen = initial_screen;
        }
        if let Some(accent_color) = args.accent_color {
            self.ui.accent_color = accent_color;
        }
        if let Some(show_scrollbar) = args.show_scrollbar {
            self.ui.show_scrollbar = show_scrollbar;
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("stackview.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            mouse: true,
            initial_screen: ScreenId::Main,
            ui: UiConfig::default(),
            keybindings: HashMap::new(),
        }
    }
}
