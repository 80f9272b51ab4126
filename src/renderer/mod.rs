use crate::agent::player::GameResult;
use crate::error::GameError;
use crate::game_repr::{Action, Board, Symbol};

pub mod text_renderer;

pub use text_renderer::{format_board, TextRenderer};

/// Trait for presenting the game to the players.
/// This abstraction keeps the orchestrator independent of the output device.
pub trait Renderer {
    /// Draw the current board
    fn draw_board(&mut self, board: &Board) -> Result<(), GameError>;

    /// Announce a committed move
    ///
    /// # Arguments
    /// * `player_name` - Display name of the player who moved
    /// * `symbol` - Mark that was placed
    /// * `action` - Cell that was played
    fn draw_move(&mut self, player_name: &str, symbol: Symbol, action: Action) -> Result<(), GameError>;

    /// Draw the final board and announce the result
    fn draw_game_end(&mut self, board: &Board, result: GameResult) -> Result<(), GameError>;
}
