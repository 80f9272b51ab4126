//! Game configuration types returned by the menu system.
//!
//! When setup completes (from command-line flags and console prompts), a
//! [`GameConfig`] holds everything needed to start the game.

use crate::agent::ai::Difficulty;
use crate::game_repr::{Symbol, DEFAULT_BOARD_SIZE};

/// Configuration for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConfig {
    /// Human player entering moves at the console
    Human,
    /// Computer player with specified difficulty
    AI { difficulty: Difficulty },
}

/// Game mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Player vs Player - two humans at one console
    PvP,
    /// Player vs AI - one human, one computer
    #[default]
    PvAI,
    /// AI vs AI - two computers (for watching/testing)
    AIvAI,
}

/// Search settings shared by every computer player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    /// Overrides the difficulty's cutoff depth
    pub cutoff_depth: Option<u8>,
    /// Overrides the default number of random opening plies
    pub opening_plies: Option<usize>,
    /// Seed for the opening-move RNG; entropy when unset
    pub seed: Option<u64>,
    /// Search root actions in parallel
    pub parallel: bool,
}

/// Complete game configuration returned by the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub mode: GameMode,
    pub board_size: usize,
    /// Configuration for the X player (moves first)
    pub x_player: PlayerConfig,
    /// Configuration for the O player
    pub o_player: PlayerConfig,
    pub engine: EngineConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::pvai(DEFAULT_BOARD_SIZE, Symbol::X, Difficulty::default())
    }
}

impl GameConfig {
    /// Create a PvP game configuration.
    pub fn pvp(board_size: usize) -> Self {
        Self {
            mode: GameMode::PvP,
            board_size,
            x_player: PlayerConfig::Human,
            o_player: PlayerConfig::Human,
            engine: EngineConfig::default(),
        }
    }

    /// Create a PvAI game configuration.
    ///
    /// # Arguments
    /// * `user_symbol` - The symbol the human player will play as
    /// * `ai_difficulty` - The difficulty level for the computer opponent
    pub fn pvai(board_size: usize, user_symbol: Symbol, ai_difficulty: Difficulty) -> Self {
        let ai = PlayerConfig::AI { difficulty: ai_difficulty };
        let (x_player, o_player) = match user_symbol {
            Symbol::X => (PlayerConfig::Human, ai),
            Symbol::O => (ai, PlayerConfig::Human),
        };

        Self {
            mode: GameMode::PvAI,
            board_size,
            x_player,
            o_player,
            engine: EngineConfig::default(),
        }
    }

    /// Create an AIvAI game configuration.
    pub fn aivai(board_size: usize, x_difficulty: Difficulty, o_difficulty: Difficulty) -> Self {
        Self {
            mode: GameMode::AIvAI,
            board_size,
            x_player: PlayerConfig::AI { difficulty: x_difficulty },
            o_player: PlayerConfig::AI { difficulty: o_difficulty },
            engine: EngineConfig::default(),
        }
    }

    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    pub fn player(&self, symbol: Symbol) -> PlayerConfig {
        match symbol {
            Symbol::X => self.x_player,
            Symbol::O => self.o_player,
        }
    }

    /// Get the human player's symbol in a PvAI game.
    /// Returns None for PvP or AIvAI games.
    pub fn human_symbol(&self) -> Option<Symbol> {
        match self.mode {
            GameMode::PvAI => {
                if matches!(self.x_player, PlayerConfig::Human) {
                    Some(Symbol::X)
                } else {
                    Some(Symbol::O)
                }
            }
            _ => None,
        }
    }
}
