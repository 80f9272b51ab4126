// Uniform random move selection, used for opening plies where a full search
// on a near-empty board is too expensive.

use crate::game_repr::{Action, Board};
use rand::seq::SliceRandom;
use rand::Rng;

/// A legal action of `board` chosen uniformly at random, or `None` when the
/// board is full.
pub fn random_legal_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Action> {
    board.legal_actions().choose(rng).copied()
}
