use super::*;

/// One of the 2N+2 winning lines of an N×N board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    MainDiagonal,
    AntiDiagonal,
    Row(usize),
    Column(usize),
}

impl Line {
    /// All lines of a `size` board: diagonals, then rows, then columns.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        [Line::MainDiagonal, Line::AntiDiagonal]
            .into_iter()
            .chain((0..size).map(Line::Row))
            .chain((0..size).map(Line::Column))
    }

    pub fn actions(self, size: usize) -> impl Iterator<Item = Action> {
        (0..size).map(move |i| match self {
            Line::MainDiagonal => Action::new(i, i),
            Line::AntiDiagonal => Action::new(i, size - 1 - i),
            Line::Row(r) => Action::new(r, i),
            Line::Column(c) => Action::new(i, c),
        })
    }
}

/// Occupancy of a line seen from one player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineCounts {
    pub mine: usize,
    pub theirs: usize,
    pub empty: usize,
}

impl Board {
    pub fn lines(&self) -> impl Iterator<Item = Line> {
        Line::all(self.size())
    }

    pub fn line_cells(&self, line: Line) -> impl Iterator<Item = Cell> + '_ {
        line.actions(self.size()).map(move |a| self[a])
    }

    pub fn line_counts(&self, line: Line, symbol: Symbol) -> LineCounts {
        let mut counts = LineCounts::default();
        for cell in self.line_cells(line) {
            match cell.symbol() {
                None => counts.empty += 1,
                Some(s) if s == symbol => counts.mine += 1,
                Some(_) => counts.theirs += 1,
            }
        }
        counts
    }

    pub fn is_line_complete(&self, line: Line, symbol: Symbol) -> bool {
        self.line_cells(line).all(|c| c == symbol)
    }
}
