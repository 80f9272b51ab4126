//! Human player that enters moves at the console.
//!
//! The player asks for a row and a column (both 1-based) and keeps asking
//! until they describe an empty cell on the board:
//!
//! ```text
//! Enter the row    (1 to 3): 2
//! Enter the column (1 to 3): 4
//! Invalid input. 4 is outside the range 1 to 3.
//! ```
//!
//! Malformed numbers, out-of-range coordinates and occupied cells are
//! reported and re-prompted. Only a closed input stream (or an I/O failure)
//! ends the player's participation: `get_move()` then returns `None`.

use crate::agent::player::Player;
use crate::console::SharedConsole;
use crate::error::GameError;
use crate::game_repr::{Action, Board};

pub struct HumanPlayer {
    /// Console shared with the orchestrator and the other player
    console: SharedConsole,

    name: String,
}

impl HumanPlayer {
    pub fn new(console: SharedConsole, name: String) -> Self {
        Self { console, name }
    }

    /// Reads coordinates until they name an empty cell of `board`.
    fn read_move(&mut self, board: &Board) -> Result<Action, GameError> {
        let size = board.size();
        let mut console = self.console.borrow_mut();

        loop {
            let row = console.prompt_number(&format!("Enter the row    (1 to {size}): "), 1, size)?;
            let col = console.prompt_number(&format!("Enter the column (1 to {size}): "), 1, size)?;

            match Action::from_one_based(row, col) {
                Some(action) if board.is_legal(action) => return Ok(action),
                _ => {
                    let err = GameError::Occupied { row, col };
                    console.write_line(&format!(
                        "Invalid input. {err}. Please choose an empty cell within the board's boundaries.\n"
                    ))?;
                }
            }
        }
    }
}

impl Player for HumanPlayer {
    fn get_move(&mut self, board: &Board) -> Option<Action> {
        match self.read_move(board) {
            Ok(action) => Some(action),
            Err(err) => {
                log::warn!("[{}] no move: {}", self.name, err);
                None
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
