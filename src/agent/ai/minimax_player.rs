//! MinimaxPlayer - computer opponent using alpha-beta search with a depth cutoff
//!
//! Move selection has two phases:
//! - **Opening**: while fewer than `opening_plies` marks are on the board the
//!   player picks a uniformly random empty cell. Branching on a near-empty
//!   large board is too wide for a useful search.
//! - **Search**: afterwards every move comes from [`alpha_beta_search`] (or
//!   its root-parallel variant) with the configured cutoff depth.
//!
//! Randomness comes from a seedable [`StdRng`] owned by the player, so games
//! are reproducible under a fixed seed.
//!
//! # Difficulty Levels
//!
//! - **Easy**: cutoff 2
//! - **Medium**: cutoff 4 (default)
//! - **Hard**: cutoff 6
//! - **Expert**: cutoff 8

use crate::agent::player::Player;
use crate::game_repr::{Action, Board};
use super::random::random_legal_move;
use super::search::{alpha_beta_search, parallel_alpha_beta_search, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// AI difficulty levels that map to search cutoff depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    /// Cutoff depth in plies for this difficulty level
    pub fn cutoff_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
            Difficulty::Expert => 8,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

/// Random plies played before search kicks in: `(size - 1) * 2`.
pub fn default_opening_plies(size: usize) -> usize {
    size.saturating_sub(1) * 2
}

/// Computer player built on depth-limited alpha-beta search.
pub struct MinimaxPlayer {
    difficulty: Difficulty,
    /// Overrides the difficulty's cutoff when set
    cutoff_depth: Option<u8>,
    /// Overrides [`default_opening_plies`] when set
    opening_plies: Option<usize>,
    parallel: bool,
    rng: StdRng,
    name: String,
    last_search: Option<SearchResult>,
}

impl MinimaxPlayer {
    pub fn new(difficulty: Difficulty, name: String, rng: StdRng) -> Self {
        Self {
            difficulty,
            cutoff_depth: None,
            opening_plies: None,
            parallel: false,
            rng,
            name,
            last_search: None,
        }
    }

    /// Player named "AI ({difficulty})" with an entropy-seeded RNG.
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        let name = format!("AI ({})", difficulty.name());
        Self::new(difficulty, name, StdRng::from_entropy())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_cutoff_depth(mut self, cutoff_depth: u8) -> Self {
        self.cutoff_depth = Some(cutoff_depth);
        self
    }

    pub fn with_opening_plies(mut self, plies: usize) -> Self {
        self.opening_plies = Some(plies);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn cutoff_depth(&self) -> u8 {
        self.cutoff_depth.unwrap_or_else(|| self.difficulty.cutoff_depth())
    }

    pub fn opening_plies(&self, size: usize) -> usize {
        self.opening_plies.unwrap_or_else(|| default_opening_plies(size))
    }

    /// Statistics of the most recent search, if the last move was searched.
    pub fn last_search(&self) -> Option<&SearchResult> {
        self.last_search.as_ref()
    }
}

impl Player for MinimaxPlayer {
    fn get_move(&mut self, board: &Board) -> Option<Action> {
        let size = board.size();
        let plies_played = size * size - board.empty_count();

        if plies_played < self.opening_plies(size) {
            self.last_search = None;
            let action = random_legal_move(board, &mut self.rng);
            log::debug!("[{}] opening ply {}, random move {:?}", self.name, plies_played, action);
            return action;
        }

        let cutoff_depth = self.cutoff_depth();
        let result = if self.parallel {
            parallel_alpha_beta_search(board, cutoff_depth)
        } else {
            alpha_beta_search(board, cutoff_depth)
        };

        log::debug!(
            "[{}] cutoff {}, score {}, {}ms",
            self.name,
            result.cutoff_depth,
            result.score,
            result.time_ms
        );

        let action = result.best_action;
        self.last_search = Some(result);
        action
    }

    fn name(&self) -> &str {
        &self.name
    }
}
