//! Runtime configuration: TOML file, then command-line overrides.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use keytac_engine::{GameState, Player};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Who moves first when the draw is overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum, Display)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// Player X moves first.
    #[display("x")]
    X,
    /// Player O moves first.
    #[display("o")]
    O,
}

impl From<FirstPlayer> for Player {
    fn from(first: FirstPlayer) -> Self {
        match first {
            FirstPlayer::X => Player::X,
            FirstPlayer::O => Player::O,
        }
    }
}

/// Settings for one run of the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// File the tracing subscriber writes to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Ring the terminal bell on an invalid move.
    #[serde(default = "default_beep")]
    beep: bool,

    /// Seed for the first-player draw.
    #[serde(default)]
    seed: Option<u64>,

    /// Skip the draw and start with this player.
    #[serde(default)]
    first_player: Option<FirstPlayer>,

    /// Print the replay log as JSON on exit.
    #[serde(default)]
    print_replay: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("keytac.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_beep() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            beep: default_beep(),
            seed: None,
            first_player: None,
            print_replay: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line flags on top of the file settings.
    #[instrument(skip_all)]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(first) = cli.first {
            self.first_player = Some(first);
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        if cli.no_beep {
            self.beep = false;
        }
        if cli.print_replay {
            self.print_replay = true;
        }
        self
    }

    /// Creates the game these settings describe.
    ///
    /// A fixed first player wins over a seed. Without either, the draw uses
    /// the thread-local generator.
    #[instrument(skip(self), fields(seed = ?self.seed, first = ?self.first_player))]
    pub fn new_game(&self) -> GameState {
        match (self.first_player, self.seed) {
            (Some(first), _) => GameState::with_first_player(first.into()),
            (None, Some(seed)) => GameState::new(&mut StdRng::seed_from_u64(seed)),
            (None, None) => GameState::new(&mut rand::rng()),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
