//! Error types for console input and board parsing.
//!
//! The rules and search code are precondition-based and never return these;
//! they surface only at the I/O edges (menu prompts, human moves, board text).

use derive_more::{Display, Error, From};

/// Errors raised while reading player input or parsing boards.
#[derive(Debug, Display, Error, From)]
pub enum GameError {
    /// Input stream reached end of file.
    #[display("input closed")]
    InputClosed,

    /// Text that should have been a number.
    #[display("'{_0}' is not a valid number")]
    NotANumber(#[error(not(source))] String),

    /// Number outside the accepted range.
    #[display("{value} is outside the range {min} to {max}")]
    OutOfRange { value: usize, min: usize, max: usize },

    /// Target cell already holds a mark. Coordinates are 1-based.
    #[display("cell ({row}, {col}) is already taken")]
    Occupied { row: usize, col: usize },

    /// Text that should have been X or O.
    #[display("'{_0}' is not X or O")]
    UnknownSymbol(#[error(not(source))] String),

    /// Board text that does not describe a square board.
    #[display("malformed board: {_0}")]
    MalformedBoard(#[error(not(source))] String),

    /// Underlying console I/O failure.
    #[display("I/O error: {_0}")]
    #[from]
    Io(std::io::Error),
}

impl GameError {
    /// Errors the player can fix by typing again.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::InputClosed | GameError::Io(_))
    }
}
