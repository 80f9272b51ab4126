// Minimax with Alpha-Beta Pruning and a depth cutoff
//
// Two mutually recursive functions walk the game tree. `max_value` plays for
// the side the search optimizes (`max_player`), `min_value` for its opponent.
// All scores are from `max_player`'s perspective:
// - terminal boards score their utility (+1000 / -1000 / 0)
// - boards at the cutoff depth score the line heuristic
//
// Each call works on its own derived board and returns (value, action); there
// is no state shared between calls.
//
// Ties keep the first action in generation order (strict `>` / `<`).

use crate::game_repr::{Action, Board, Symbol};
use super::evaluation::evaluate;

/// Stands in for ±infinity in the alpha-beta window.
pub const INFINITY: i32 = i32::MAX;

/// Parameters fixed for the whole search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchContext {
    /// Side the search optimizes for.
    pub max_player: Symbol,
    /// Depth at which the heuristic replaces further expansion.
    pub cutoff_depth: u8,
}

impl SearchContext {
    pub fn new(max_player: Symbol, cutoff_depth: u8) -> Self {
        Self { max_player, cutoff_depth }
    }

    /// Leaf score for `state`, or `None` if it must be expanded.
    fn leaf_value(&self, state: &Board, depth: u8) -> Option<i32> {
        if let Some(utility) = state.utility(self.max_player) {
            return Some(utility);
        }
        if depth >= self.cutoff_depth {
            return Some(evaluate(state, self.max_player));
        }
        None
    }
}

/// Best value `max_player` can force from `state`.
///
/// Returns as soon as the value reaches `beta`: the minimizing parent already
/// has a better alternative, so the remaining actions cannot matter.
pub fn max_value(
    state: &Board,
    ctx: SearchContext,
    depth: u8,
    mut alpha: i32,
    beta: i32,
) -> (i32, Option<Action>) {
    if let Some(value) = ctx.leaf_value(state, depth) {
        return (value, None);
    }

    let mut best_value = -INFINITY;
    let mut best_action = None;

    for action in state.legal_actions() {
        let (value, _) = min_value(&state.apply_action(action), ctx, depth + 1, alpha, beta);

        if value > best_value {
            best_value = value;
            best_action = Some(action);
            alpha = alpha.max(best_value);
        }

        // Beta cutoff
        if best_value >= beta {
            return (best_value, best_action);
        }
    }

    (best_value, best_action)
}

/// Lowest value the opponent can hold `max_player` to from `state`.
pub fn min_value(
    state: &Board,
    ctx: SearchContext,
    depth: u8,
    alpha: i32,
    mut beta: i32,
) -> (i32, Option<Action>) {
    if let Some(value) = ctx.leaf_value(state, depth) {
        return (value, None);
    }

    let mut best_value = INFINITY;
    let mut best_action = None;

    for action in state.legal_actions() {
        let (value, _) = max_value(&state.apply_action(action), ctx, depth + 1, alpha, beta);

        if value < best_value {
            best_value = value;
            best_action = Some(action);
            beta = beta.min(best_value);
        }

        // Alpha cutoff
        if best_value <= alpha {
            return (best_value, best_action);
        }
    }

    (best_value, best_action)
}
