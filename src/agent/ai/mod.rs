// AI Agent - Minimax with Alpha-Beta Pruning
//
// This module implements the computer opponent: a depth-limited minimax
// search with alpha-beta pruning, scoring cut-off positions with a line-based
// heuristic.
//
// Key features:
// - Deterministic search (same board always gives same move)
// - Configurable cutoff depth per difficulty level
// - Optional root-parallel search on the rayon pool
// - Seeded random moves for the opening plies

mod alpha_beta;
mod evaluation;
mod minimax_player;
mod random;
mod search;

#[cfg(test)]
mod tests;

pub use minimax_player::{default_opening_plies, Difficulty, MinimaxPlayer};

// Re-export the engine entry points
pub use alpha_beta::{max_value, min_value, SearchContext, INFINITY};
pub use evaluation::{evaluate, line_score, COMPLETE_LINE, ONE_SHORT_LINE, OPEN_LINE};
pub use random::random_legal_move;
pub use search::{alpha_beta_search, parallel_alpha_beta_search, SearchResult, DEFAULT_CUTOFF_DEPTH};
