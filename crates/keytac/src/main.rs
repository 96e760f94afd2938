//! keytac - two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod cli;
mod config;
mod keymap;
mod logging;
mod screen;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::AppConfig;
use crossterm::event;
use keytac_engine::Controller;
use ratatui::{Terminal, backend::CrosstermBackend};
use screen::{Screen, TerminalGuard};
use std::io;
use tracing::{error, info};

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?.with_overrides(&cli);
    logging::init(&config)?;

    info!(?config, "Starting keytac");

    let mut game = Controller::new(config.new_game());
    info!(first_player = %game.state().turn(), "Game created");

    let mut guard = TerminalGuard::enter()?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut screen = Screen::new(terminal, io::stdout(), *config.beep());
    let res = screen.run(&mut game, std::iter::repeat_with(event::read));
    guard.restore()?;

    if let Err(e) = &res {
        error!(error = ?e, "Game loop error");
    }
    res?;

    info!(
        lifecycle = ?game.lifecycle(),
        moves = game.state().move_count(),
        "Game finished"
    );

    if *config.print_replay() {
        let json = serde_json::to_string_pretty(game.state().replay())
            .context("Failed to serialize replay log")?;
        println!("{}", json);
    }

    Ok(())
}
