use super::app_config::LogLevel;
use crate::domain::ScreenId;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "stackview",
    version,
    about = "A terminal screen sample with a push/pop navigation stack",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable mouse support.
    #[arg(long)]
    pub mouse: Option<bool>,

    /// Screen placed at the bottom of the navigation stack.
    #[arg(long, value_name = "NAME")]
    pub initial_screen: Option<ScreenId>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,

    /// Show a scrollbar beside the row list.
    #[arg(long)]
    pub show_scrollbar: Option<bool>,
}
