//! Command-line interface for the tic-tac-toe binary.

use crate::agent::ai::Difficulty;
use crate::game_repr::Symbol;
use crate::menu::{EngineConfig, GameMode};
use clap::{Parser, ValueEnum};

/// Console tic-tac-toe against a minimax engine
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Console tic-tac-toe with an alpha-beta search opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board size (3 to 9). Asked at startup when omitted
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(3..=9))]
    pub size: Option<u8>,

    /// Who plays against whom
    #[arg(short, long, value_enum, default_value_t = ModeArg::Pvai)]
    pub mode: ModeArg,

    /// Human's symbol in pvai mode. Asked at startup when omitted
    #[arg(long, value_enum)]
    pub human: Option<SymbolArg>,

    /// Strength of the computer player(s)
    #[arg(short, long, value_enum, default_value_t = DifficultyArg::Medium)]
    pub difficulty: DifficultyArg,

    /// Search cutoff depth in plies, overrides the difficulty
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=81))]
    pub depth: Option<u8>,

    /// Random opening plies before the engine starts searching [default: (size - 1) * 2]
    #[arg(long)]
    pub opening_plies: Option<usize>,

    /// Seed for the computer's random opening moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Search the root moves in parallel
    #[arg(long)]
    pub parallel: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Two humans
    Pvp,
    /// Human against the computer
    Pvai,
    /// Computer against itself
    Aivai,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolArg {
    X,
    O,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Pvp => GameMode::PvP,
            ModeArg::Pvai => GameMode::PvAI,
            ModeArg::Aivai => GameMode::AIvAI,
        }
    }
}

impl From<SymbolArg> for Symbol {
    fn from(symbol: SymbolArg) -> Self {
        match symbol {
            SymbolArg::X => Symbol::X,
            SymbolArg::O => Symbol::O,
        }
    }
}

impl From<DifficultyArg> for Difficulty {
    fn from(difficulty: DifficultyArg) -> Self {
        match difficulty {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
            DifficultyArg::Expert => Difficulty::Expert,
        }
    }
}

impl Cli {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            cutoff_depth: self.depth,
            opening_plies: self.opening_plies,
            seed: self.seed,
            parallel: self.parallel,
        }
    }
}
