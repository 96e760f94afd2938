//! Command-line interface for keytac.

use crate::config::FirstPlayer;
use clap::Parser;
use std::path::PathBuf;

/// keytac - two-player tic-tac-toe driven by the arrow keys
#[derive(Parser, Debug)]
#[command(name = "keytac")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "keytac.toml")]
    pub config: PathBuf,

    /// Seed for the first-player draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Force the first player instead of drawing one
    #[arg(long, value_enum)]
    pub first: Option<FirstPlayer>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Do not ring the terminal bell on an invalid move
    #[arg(long)]
    pub no_beep: bool,

    /// Print the game's replay log as JSON after exiting
    #[arg(long)]
    pub print_replay: bool,
}
