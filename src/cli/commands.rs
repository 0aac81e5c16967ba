use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::model::FilterMode;

#[derive(Parser)]
#[command(name = "tl", about = concat!("tl v", env!("CARGO_PKG_VERSION"), " - a task list for this session"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep preferences in this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub prefs: Option<PathBuf>,

    /// Keep preferences in memory only
    #[arg(long, global = true, conflicts_with = "prefs")]
    pub no_persist: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List tasks in the session view
    List(ListArgs),
    /// Show active and completed counts
    Stats,
    /// Show or change the light/dark theme
    Theme(ThemeArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Which tasks to show: all, active, or completed
    #[arg(long, short, default_value = "all")]
    pub filter: FilterMode,
}

#[derive(Args)]
pub struct ThemeArgs {
    /// What to do with the theme (default: show)
    #[arg(value_enum)]
    pub action: Option<ThemeAction>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    /// Print the current theme
    Show,
    /// Switch to the dark theme
    Dark,
    /// Switch to the light theme
    Light,
    /// Flip between light and dark
    Toggle,
}
