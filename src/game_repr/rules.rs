use super::*;
use smallvec::SmallVec;

/// Utility of a won game for the winner; the loser gets the negation.
pub const WIN_UTILITY: i32 = 1000;

/// Utility of a drawn game.
pub const DRAW_UTILITY: i32 = 0;

/// Legal actions in row-major order. Inline capacity covers boards up to 8×8.
pub type ActionList = SmallVec<[Action; 64]>;

impl Board {
    /// Side to move, derived from the mark counts: X moves whenever the
    /// counts are equal.
    pub fn current_player(&self) -> Symbol {
        if self.count(Symbol::X) == self.count(Symbol::O) {
            Symbol::X
        } else {
            Symbol::O
        }
    }

    /// Every empty cell, row-major. Search relies on this order for
    /// reproducible tie-breaking.
    pub fn legal_actions(&self) -> ActionList {
        let size = self.size();
        self.cells()
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| Action::new(idx / size, idx % size))
            .collect()
    }

    /// Whether `action` is on the board and targets an empty cell.
    pub fn is_legal(&self, action: Action) -> bool {
        self.in_bounds(action) && self[action].is_empty()
    }

    /// New board with the side to move placed at `action`.
    ///
    /// `action` must come from [`Board::legal_actions`] of this board.
    pub fn apply_action(&self, action: Action) -> Board {
        debug_assert!(self.is_legal(action), "apply_action on occupied cell {action}");
        let mut next = self.clone();
        next.set(action, self.current_player().into());
        next
    }

    /// Commits `symbol` at `action` in place. Used for the live game only.
    pub fn make_move(&mut self, action: Action, symbol: Symbol) {
        debug_assert!(self.is_legal(action), "make_move on occupied cell {action}");
        self.set(action, symbol.into());
    }

    pub fn has_line(&self, symbol: Symbol) -> bool {
        self.lines().any(|line| self.is_line_complete(line, symbol))
    }

    pub fn winner(&self) -> Option<Symbol> {
        [Symbol::X, Symbol::O].into_iter().find(|&s| self.has_line(s))
    }

    pub fn is_draw(&self) -> bool {
        self.is_full() && !self.has_line(Symbol::X) && !self.has_line(Symbol::O)
    }

    pub fn is_terminal(&self) -> bool {
        self.has_line(Symbol::X) || self.has_line(Symbol::O) || self.is_draw()
    }

    /// Final score from `perspective`'s side, or `None` while the game is
    /// still running.
    pub fn utility(&self, perspective: Symbol) -> Option<i32> {
        if self.has_line(perspective) {
            Some(WIN_UTILITY)
        } else if self.has_line(perspective.opposite()) {
            Some(-WIN_UTILITY)
        } else if self.is_draw() {
            Some(DRAW_UTILITY)
        } else {
            None
        }
    }
}
