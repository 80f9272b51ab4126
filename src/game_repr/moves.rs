use std::fmt;

/// A placement on the board, 0-indexed internally.
///
/// Only meaningful relative to the board it was generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Action {
        Self { row, col }
    }

    /// Builds an action from the 1-based coordinates shown to players.
    pub fn from_one_based(row: usize, col: usize) -> Option<Action> {
        if row == 0 || col == 0 {
            return None;
        }
        Some(Self::new(row - 1, col - 1))
    }

    pub fn index(&self, size: usize) -> usize {
        self.row * size + self.col
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Displays 1-based, the way players type coordinates.
impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}
