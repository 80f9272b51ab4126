//! End-to-end games driven through the console, the way the binary runs them.
//!
//! Human answers are scripted through an in-memory reader, and everything the
//! game prints is captured for inspection.

use std::io::Cursor;
use tictactoe_engine::agent::ai::Difficulty;
use tictactoe_engine::agent::player::GameResult;
use tictactoe_engine::cli::Cli;
use tictactoe_engine::console::{CapturedOutput, Console, SharedConsole};
use tictactoe_engine::game_repr::{Action, Symbol};
use tictactoe_engine::menu::{EngineConfig, GameConfig, Menu};
use tictactoe_engine::orchestrator::Orchestrator;
use clap::Parser;

fn scripted_console(input: &str) -> (SharedConsole, CapturedOutput) {
    let output = CapturedOutput::new();
    let console = Console::new(Cursor::new(input.to_string()), output.clone()).shared();
    (console, output)
}

fn perfect_engine(seed: u64, parallel: bool) -> EngineConfig {
    EngineConfig {
        cutoff_depth: Some(9),
        opening_plies: Some(0),
        seed: Some(seed),
        parallel,
    }
}

/// Every cell of a 3x3 board in row-major order, 1-based.
const ALL_CELLS: &str = "1\n1\n1\n2\n1\n3\n2\n1\n2\n2\n2\n3\n3\n1\n3\n2\n3\n3\n";

fn play_naive_human_against_engine(parallel: bool) -> (Orchestrator, GameResult, String) {
    let (console, output) = scripted_console(ALL_CELLS);
    let config = GameConfig::pvai(3, Symbol::X, Difficulty::Expert).with_engine(perfect_engine(7, parallel));
    let mut game = Orchestrator::from_config(&config, console);
    let result = game.run().expect("game loop failed");
    (game, result, output.contents())
}

#[test]
fn test_engine_punishes_naive_human() {
    // X plays the first free cell of the script each turn:
    // X (1,1), O center, X (1,2), O blocks (1,3), X (2,1), O wins on the anti-diagonal.
    let (game, result, output) = play_naive_human_against_engine(false);

    assert_eq!(result, GameResult::OWins);
    assert_eq!(
        game.history(),
        &[
            Action::new(0, 0),
            Action::new(1, 1),
            Action::new(0, 1),
            Action::new(0, 2),
            Action::new(1, 0),
            Action::new(2, 0),
        ]
    );
    assert!(output.contains("Computer (O) played in cell (2, 2)"));
    assert!(output.contains("cell (1, 3) is already taken"));
    assert!(output.trim_end().ends_with("Player O wins!"));
}

#[test]
fn test_parallel_engine_plays_the_same_game() {
    let (sequential, _, _) = play_naive_human_against_engine(false);
    let (parallel, result, _) = play_naive_human_against_engine(true);
    assert_eq!(result, GameResult::OWins);
    assert_eq!(sequential.history(), parallel.history());
}

#[test]
fn test_two_humans_share_one_console() {
    // X: (1,1) (1,2) (1,3), O: (2,1) (2,2)
    let input = "1\n1\n2\n1\n1\n2\n2\n2\n1\n3\n";
    let (console, output) = scripted_console(input);
    let mut game = Orchestrator::from_config(&GameConfig::pvp(3), console);

    assert_eq!(game.run().unwrap(), GameResult::XWins);
    let output = output.contents();
    assert!(output.contains("Player O (O) played in cell (2, 2)"));
    assert!(output.trim_end().ends_with("Player X wins!"));
}

#[test]
fn test_out_of_range_answer_is_reprompted() {
    let input = "0\n4\nabc\n1\n1\n";
    let (console, output) = scripted_console(input);
    let mut game = Orchestrator::from_config(&GameConfig::pvp(3), console);

    assert_eq!(game.play_turn().unwrap(), None);
    assert_eq!(game.history(), &[Action::new(0, 0)]);
    let output = output.contents();
    assert!(output.contains("0 is outside the range 1 to 3"));
    assert!(output.contains("'abc' is not a valid number"));
}

#[test]
fn test_closed_input_abandons_game() {
    let (console, output) = scripted_console("2\n2\n");
    let config = GameConfig::pvai(3, Symbol::X, Difficulty::Easy).with_engine(perfect_engine(3, false));
    let mut game = Orchestrator::from_config(&config, console);

    assert_eq!(game.run().unwrap(), GameResult::Abandoned);
    // Human center, engine reply, then the script runs out.
    assert_eq!(game.history().len(), 2);
    assert!(output.contents().contains("Game abandoned."));
}

#[test]
fn test_engine_self_play_on_3x3_is_a_draw() {
    let (console, output) = scripted_console("");
    let config = GameConfig::aivai(3, Difficulty::Expert, Difficulty::Expert).with_engine(perfect_engine(11, false));
    let mut game = Orchestrator::from_config(&config, console);

    assert_eq!(game.run().unwrap(), GameResult::Draw);
    assert!(game.board().is_full());
    assert!(output.contents().trim_end().ends_with("It is a draw!"));
}

#[test]
fn test_shallow_self_play_on_larger_boards_terminates() {
    for size in 4..=6 {
        let (console, _) = scripted_console("");
        let engine = EngineConfig {
            cutoff_depth: Some(2),
            opening_plies: None,
            seed: Some(size as u64),
            parallel: size % 2 == 0,
        };
        let config = GameConfig::aivai(size, Difficulty::Easy, Difficulty::Easy).with_engine(engine);
        let mut game = Orchestrator::from_config(&config, console);

        let result = game.run().unwrap();
        assert_ne!(result, GameResult::Abandoned);
        assert_eq!(Some(result), GameResult::from_board(game.board()));

        let board = game.board();
        let (x, o) = (board.count(Symbol::X), board.count(Symbol::O));
        assert!(x == o || x == o + 1, "size {size}: {x} X against {o} O");
    }
}

#[test]
fn test_menu_then_game_from_command_line() {
    let (console, output) = scripted_console("3\nx\n1\n1\n");
    let cli = Cli::parse_from(["tictactoe", "--depth", "9", "--opening-plies", "0", "--seed", "5"]);
    let config = Menu::new(console.clone()).configure(&cli).unwrap();
    assert_eq!(config.human_symbol(), Some(Symbol::X));

    let mut game = Orchestrator::from_config(&config, console);
    assert_eq!(game.run().unwrap(), GameResult::Abandoned);
    // Only the center reply to a corner opening avoids losing.
    assert_eq!(game.history(), &[Action::new(0, 0), Action::new(1, 1)]);
    assert!(output.contents().contains("Enter the size of the board (3 to 9): "));
}
