//! Console setup menu.
//!
//! Fills in whatever the command line left open: the board size and, in a
//! human-vs-computer game, the human's symbol. Answers are re-prompted until
//! valid.

pub mod config;

pub use config::{EngineConfig, GameConfig, GameMode, PlayerConfig};

use crate::cli::Cli;
use crate::console::SharedConsole;
use crate::error::GameError;
use crate::game_repr::{Symbol, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

pub struct Menu {
    console: SharedConsole,
}

impl Menu {
    pub fn new(console: SharedConsole) -> Self {
        Self { console }
    }

    pub fn prompt_board_size(&mut self) -> Result<usize, GameError> {
        self.console.borrow_mut().prompt_number(
            &format!("Enter the size of the board ({MIN_BOARD_SIZE} to {MAX_BOARD_SIZE}): "),
            MIN_BOARD_SIZE,
            MAX_BOARD_SIZE,
        )
    }

    pub fn prompt_symbol(&mut self) -> Result<Symbol, GameError> {
        self.console
            .borrow_mut()
            .prompt_until("Choose your symbol (X or O): ", parse_symbol)
    }

    /// Builds the game configuration from `cli`, asking for missing values.
    pub fn configure(&mut self, cli: &Cli) -> Result<GameConfig, GameError> {
        let board_size = match cli.size {
            Some(size) => size as usize,
            None => self.prompt_board_size()?,
        };
        let difficulty = cli.difficulty.into();

        let config = match GameMode::from(cli.mode) {
            GameMode::PvP => GameConfig::pvp(board_size),
            GameMode::PvAI => {
                let human = match cli.human {
                    Some(symbol) => symbol.into(),
                    None => self.prompt_symbol()?,
                };
                GameConfig::pvai(board_size, human, difficulty)
            }
            GameMode::AIvAI => GameConfig::aivai(board_size, difficulty, difficulty),
        };

        let config = config.with_engine(cli.engine_config());
        log::info!("configured {:?}", config);
        Ok(config)
    }
}

/// Parses a player's symbol answer, case-insensitively.
pub fn parse_symbol(answer: &str) -> Result<Symbol, GameError> {
    let mut chars = answer.chars();
    match (chars.next().and_then(Symbol::from_char), chars.next()) {
        (Some(symbol), None) => Ok(symbol),
        _ => Err(GameError::UnknownSymbol(answer.to_string())),
    }
}
