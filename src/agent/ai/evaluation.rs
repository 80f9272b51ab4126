// Heuristic board evaluation for positions cut off before a terminal state.
// Returns a score from the perspective of the given player (positive = good
// for that player).
//
// Every row, column and both diagonals are scored independently and summed.
// A line that holds marks of both players can never be completed and scores
// nothing. A line holding only one player's marks scores by how close it is
// to completion:
//
//   complete          30
//   one cell short    10
//   started           1
//
// On a 3×3 board this is exactly 3 / 2+1 empty / 1+2 empty. On larger boards
// the top two tiers follow the distance to completion, and any other started
// line is worth 1.

use crate::game_repr::{Board, LineCounts, Symbol};

/// Score of a line fully held by one player.
pub const COMPLETE_LINE: i32 = 30;

/// Score of a line missing exactly one mark.
pub const ONE_SHORT_LINE: i32 = 10;

/// Score of any other uncontested line with at least one mark.
pub const OPEN_LINE: i32 = 1;

/// Weight of an uncontested run of `marks` on a line of `size` cells.
fn run_weight(marks: usize, size: usize) -> i32 {
    if marks == 0 {
        0
    } else if marks >= size {
        COMPLETE_LINE
    } else if marks + 1 == size {
        ONE_SHORT_LINE
    } else {
        OPEN_LINE
    }
}

/// Contribution of a single line. Contested lines are dead and score 0.
pub fn line_score(counts: LineCounts, size: usize) -> i32 {
    match (counts.mine, counts.theirs) {
        (mine, 0) => run_weight(mine, size),
        (0, theirs) => -run_weight(theirs, size),
        _ => 0,
    }
}

/// Evaluate `board` for `player`.
///
/// Meant for non-terminal boards; terminal boards should be scored with
/// [`Board::utility`] instead.
pub fn evaluate(board: &Board, player: Symbol) -> i32 {
    let size = board.size();
    board
        .lines()
        .map(|line| line_score(board.line_counts(line, player), size))
        .sum()
}
