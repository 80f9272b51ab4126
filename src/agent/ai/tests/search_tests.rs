// Tests for the alpha-beta search

use crate::game_repr::{Action, Board, Symbol};
use crate::agent::ai::alpha_beta::{SearchContext, INFINITY};
use crate::agent::ai::evaluation::evaluate;
use crate::agent::ai::random::random_legal_move;
use crate::agent::ai::search::{alpha_beta_search, parallel_alpha_beta_search};
use crate::agent::player::GameResult;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Enough plies to reach every terminal state on a 3×3 board.
const FULL_DEPTH: u8 = 9;

fn board(rows: &str) -> Board {
    rows.parse().unwrap()
}

/// Plain minimax without pruning, same cutoff and tie-break rules.
fn minimax(state: &Board, ctx: SearchContext, depth: u8, maximizing: bool) -> (i32, Option<Action>) {
    if let Some(utility) = state.utility(ctx.max_player) {
        return (utility, None);
    }
    if depth >= ctx.cutoff_depth {
        return (evaluate(state, ctx.max_player), None);
    }

    let mut best_value = if maximizing { -INFINITY } else { INFINITY };
    let mut best_action = None;
    for action in state.legal_actions() {
        let (value, _) = minimax(&state.apply_action(action), ctx, depth + 1, !maximizing);
        let better = if maximizing { value > best_value } else { value < best_value };
        if better {
            best_value = value;
            best_action = Some(action);
        }
    }
    (best_value, best_action)
}

/// Non-terminal boards reached by random play.
fn random_positions(size: usize, count: usize, seed: u64) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut boards = Vec::new();
    while boards.len() < count {
        let mut b = Board::new(size);
        let plies = (boards.len() % (size * size - 1)) + 1;
        for _ in 0..plies {
            if b.is_terminal() {
                break;
            }
            let action = random_legal_move(&b, &mut rng).unwrap();
            b = b.apply_action(action);
        }
        if !b.is_terminal() {
            boards.push(b);
        }
    }
    boards
}

/// Plays a full game; `engine` moves use full-depth search, the other side
/// moves at random.
fn play_against_random(engine: Symbol, seed: u64) -> GameResult {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut b = Board::new(3);
    loop {
        if let Some(result) = GameResult::from_board(&b) {
            return result;
        }
        let action = if b.current_player() == engine {
            alpha_beta_search(&b, FULL_DEPTH).best_action
        } else {
            random_legal_move(&b, &mut rng)
        };
        b = b.apply_action(action.unwrap());
    }
}

// ==================== CONCRETE POSITIONS ====================

#[test]
fn test_takes_winning_move() {
    let result = alpha_beta_search(&board("XX./OO./..."), 4);
    assert_eq!(result.best_action, Some(Action::new(0, 2)));
    assert_eq!(result.score, 1000);
}

#[test]
fn test_blocks_opponent_line() {
    // X has no immediate win; O threatens (1, 2).
    let b = board("X../OO./X..");
    for cutoff in [2, 4, FULL_DEPTH] {
        let result = alpha_beta_search(&b, cutoff);
        assert_eq!(result.best_action, Some(Action::new(1, 2)), "cutoff {cutoff}");
        assert!(result.score > -1000);
    }
}

#[test]
fn test_o_blocks_too() {
    // O to move, X threatens the main diagonal.
    let b = board("X.O/.X./...");
    let result = alpha_beta_search(&b, FULL_DEPTH);
    assert_eq!(result.best_action, Some(Action::new(2, 2)));
}

#[test]
fn test_terminal_board_yields_no_action() {
    let drawn = board("XOX/XOO/OXX");
    assert!(drawn.is_draw());
    let result = alpha_beta_search(&drawn, 4);
    assert_eq!(result.best_action, None);
    assert_eq!(result.score, 0);

    let won = board("OOO/XX./X..");
    let result = parallel_alpha_beta_search(&won, 4);
    assert_eq!(result.best_action, None);
    assert_eq!(result.score, -1000);
}

#[test]
fn test_zero_cutoff_is_clamped() {
    let result = alpha_beta_search(&Board::new(4), 0);
    assert_eq!(result.cutoff_depth, 1);
    assert!(result.best_action.is_some());
}

#[test]
fn test_large_board_shallow_search() {
    let b = board(".......X./........./....O..../........./........./........./........./........./.........");
    let result = alpha_beta_search(&b, 2);
    let action = result.best_action.unwrap();
    assert!(b.is_legal(action));
}

// ==================== SOLVED 3×3 ====================

#[test]
fn test_empty_board_is_a_draw() {
    let result = alpha_beta_search(&Board::new(3), FULL_DEPTH);
    assert_eq!(result.score, 0);
    assert!(result.best_action.is_some());
}

#[test]
fn test_every_opening_is_a_draw_for_o() {
    let empty = Board::new(3);
    for opening in empty.legal_actions() {
        let b = empty.apply_action(opening);
        let result = alpha_beta_search(&b, FULL_DEPTH);
        assert_eq!(result.score, 0, "after X plays {opening}");
    }
}

#[test]
fn test_self_play_is_a_draw() {
    let mut b = Board::new(3);
    while !b.is_terminal() {
        let action = alpha_beta_search(&b, FULL_DEPTH).best_action.unwrap();
        b = b.apply_action(action);
    }
    assert_eq!(GameResult::from_board(&b), Some(GameResult::Draw));
}

#[test]
fn test_never_loses_to_random_play() {
    for seed in 0..10 {
        for engine in [Symbol::X, Symbol::O] {
            let result = play_against_random(engine, seed);
            assert_ne!(
                result.winner(),
                Some(engine.opposite()),
                "engine {engine} lost with seed {seed}"
            );
        }
    }
}

// ==================== PRUNING EQUIVALENCE ====================

#[test]
fn test_matches_unpruned_minimax_three_by_three() {
    for b in random_positions(3, 40, 5) {
        for cutoff in 1..=4 {
            let ctx = SearchContext::new(b.current_player(), cutoff);
            let expected = minimax(&b, ctx, 0, true);
            let result = alpha_beta_search(&b, cutoff);
            assert_eq!((result.score, result.best_action), expected, "board {b} cutoff {cutoff}");
        }
    }
}

#[test]
fn test_matches_unpruned_minimax_full_depth() {
    for b in random_positions(3, 30, 9).into_iter().filter(|b| b.empty_count() <= 6) {
        let ctx = SearchContext::new(b.current_player(), FULL_DEPTH);
        let expected = minimax(&b, ctx, 0, true);
        let result = alpha_beta_search(&b, FULL_DEPTH);
        assert_eq!((result.score, result.best_action), expected, "board {b}");
    }
}

#[test]
fn test_matches_unpruned_minimax_four_by_four() {
    for b in random_positions(4, 20, 13) {
        for cutoff in 1..=3 {
            let ctx = SearchContext::new(b.current_player(), cutoff);
            let expected = minimax(&b, ctx, 0, true);
            let result = alpha_beta_search(&b, cutoff);
            assert_eq!((result.score, result.best_action), expected, "board {b} cutoff {cutoff}");
        }
    }
}

#[test]
fn test_parallel_matches_sequential() {
    for (size, cutoff) in [(3, 4), (4, 2), (5, 2)] {
        for b in random_positions(size, 15, 21) {
            let sequential = alpha_beta_search(&b, cutoff);
            let parallel = parallel_alpha_beta_search(&b, cutoff);
            assert_eq!(sequential.best_action, parallel.best_action, "board {b}");
            assert_eq!(sequential.score, parallel.score, "board {b}");
        }
    }
}
