use super::*;
use crate::error::GameError;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 9;
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Square N×N grid of cells, stored row-major.
///
/// Search never mutates a board in place; it derives new boards through
/// [`Board::apply_action`]. Only the live game board is updated in place via
/// [`Board::make_move`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl Board {
    /// Empty `size`×`size` board. Callers validate `size` against
    /// [`MIN_BOARD_SIZE`]..=[`MAX_BOARD_SIZE`].
    pub fn new(size: usize) -> Board {
        debug_assert!(size > 0, "board size must be positive");
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.size + col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    pub fn in_bounds(&self, action: Action) -> bool {
        action.row < self.size && action.col < self.size
    }

    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells.iter().filter(|&&c| c == symbol).count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(Cell::is_empty)
    }

    pub(crate) fn set(&mut self, action: Action, cell: Cell) {
        let idx = action.index(self.size);
        self.cells[idx] = cell;
    }
}

impl Index<Action> for Board {
    type Output = Cell;

    fn index(&self, action: Action) -> &Cell {
        &self.cells[action.index(self.size)]
    }
}

/// Rows separated by `/`, e.g. `"XX./OO./..."`.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        let size = rows.len();

        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::MalformedBoard(format!(
                "expected {MIN_BOARD_SIZE} to {MAX_BOARD_SIZE} rows, found {size}"
            )));
        }

        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            let parsed: Option<Vec<Cell>> = row.chars().map(Cell::from_char).collect();
            let parsed = parsed.ok_or_else(|| {
                GameError::MalformedBoard(format!("row {} has an unknown cell: '{row}'", r + 1))
            })?;
            if parsed.len() != size {
                return Err(GameError::MalformedBoard(format!(
                    "row {} has {} cells, expected {size}",
                    r + 1,
                    parsed.len()
                )));
            }
            cells.extend(parsed);
        }

        Ok(Self { size, cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
        }
        Ok(())
    }
}
