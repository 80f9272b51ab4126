//! Player trait and associated types for tic-tac-toe agents.
//!
//! A player is anything that can choose an [`Action`] for the side to move:
//! a human typing coordinates at the console, or the minimax engine. The
//! orchestrator owns the live board and only lends it to players read-only,
//! so a player can never commit a move itself.
//!
//! # Synchronous Design
//!
//! `get_move()` blocks until the player has decided. That keeps the turn loop
//! a plain `loop`: ask the current player, validate, commit, check for the
//! end of the game, switch sides.

use crate::game_repr::{Action, Board, Symbol};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    XWins,
    OWins,
    Draw,
    /// A player stopped answering (e.g. the input stream closed).
    Abandoned,
}

impl GameResult {
    pub fn from_winner(winner: Symbol) -> Self {
        match winner {
            Symbol::X => GameResult::XWins,
            Symbol::O => GameResult::OWins,
        }
    }

    /// Result of a terminal board, `None` while the game is running.
    pub fn from_board(board: &Board) -> Option<Self> {
        if let Some(winner) = board.winner() {
            Some(Self::from_winner(winner))
        } else if board.is_draw() {
            Some(GameResult::Draw)
        } else {
            None
        }
    }

    pub fn winner(&self) -> Option<Symbol> {
        match self {
            GameResult::XWins => Some(Symbol::X),
            GameResult::OWins => Some(Symbol::O),
            _ => None,
        }
    }
}

/// Trait for entities that can provide moves.
///
/// Only `get_move()` is required; the notifications default to no-ops.
pub trait Player {
    /// Choose a move for the side to move on `board`.
    ///
    /// Returns `None` if the player cannot or will not move (closed input).
    /// The orchestrator re-validates the returned action before committing it.
    fn get_move(&mut self, board: &Board) -> Option<Action>;

    /// Called after the opponent's move has been committed.
    fn opponent_moved(&mut self, _action: Action) {}

    /// Called once when the game reaches a final result.
    fn game_ended(&mut self, _result: GameResult) {}

    fn name(&self) -> &str {
        "Player"
    }
}
