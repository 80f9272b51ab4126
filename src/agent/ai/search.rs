// Search Entry Points
//
// Wraps the alpha-beta recursion for move selection: picks the maximizing
// side from the board, runs the search from the root, and reports the result
// together with timing information.
//
// `parallel_alpha_beta_search` splits only the root action list across the
// rayon pool. Sibling subtrees below the root stay sequential, since pruning
// depends on the bounds found by earlier siblings.

use crate::game_repr::{Action, Board};
use super::alpha_beta::{max_value, min_value, SearchContext, INFINITY};
use rayon::prelude::*;
use std::time::Instant;

/// Plies searched before the heuristic takes over.
pub const DEFAULT_CUTOFF_DEPTH: u8 = 4;

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_action: Option<Action>,
    /// Value of `best_action` for the side to move
    pub score: i32,
    pub cutoff_depth: u8,
    pub time_ms: u64,
}

/// Alpha-beta search from `board` for the side to move.
///
/// `board` should be non-terminal; on a terminal board the result carries the
/// utility and no action. `cutoff_depth` is clamped to at least 1 so a
/// non-terminal root always yields an action.
pub fn alpha_beta_search(board: &Board, cutoff_depth: u8) -> SearchResult {
    let start_time = Instant::now();
    let ctx = SearchContext::new(board.current_player(), cutoff_depth.max(1));

    let (score, best_action) = max_value(board, ctx, 0, -INFINITY, INFINITY);

    finish(ctx, score, best_action, &start_time)
}

/// Same result as [`alpha_beta_search`], with the root actions searched in
/// parallel.
///
/// Every root subtree is searched with a full window, so each value is exact
/// and the merge keeps the first strict maximum in generation order, the same
/// action the sequential search keeps.
pub fn parallel_alpha_beta_search(board: &Board, cutoff_depth: u8) -> SearchResult {
    let start_time = Instant::now();
    let ctx = SearchContext::new(board.current_player(), cutoff_depth.max(1));

    if let Some(utility) = board.utility(ctx.max_player) {
        return finish(ctx, utility, None, &start_time);
    }

    let actions = board.legal_actions();
    let values: Vec<i32> = actions
        .as_slice()
        .par_iter()
        .map(|&action| min_value(&board.apply_action(action), ctx, 1, -INFINITY, INFINITY).0)
        .collect();

    let mut score = -INFINITY;
    let mut best_action = None;
    for (&action, value) in actions.iter().zip(values) {
        if value > score {
            score = value;
            best_action = Some(action);
        }
    }

    finish(ctx, score, best_action, &start_time)
}

fn finish(
    ctx: SearchContext,
    score: i32,
    best_action: Option<Action>,
    start_time: &Instant,
) -> SearchResult {
    let result = SearchResult {
        best_action,
        score,
        cutoff_depth: ctx.cutoff_depth,
        time_ms: start_time.elapsed().as_millis() as u64,
    };

    log::debug!(
        "search {} cutoff {} score {} time {}ms best {:?}",
        ctx.max_player,
        result.cutoff_depth,
        result.score,
        result.time_ms,
        result.best_action
    );

    result
}
