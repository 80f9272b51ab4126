//! Game lifecycle management and turn coordination.
//!
//! This module contains the [`Orchestrator`], the root coordinator of a
//! console game. It manages:
//! - The live [`Board`], the only board that is mutated in place
//! - Player instantiation from a [`GameConfig`]
//! - Game flow (request move, commit move, end detection)
//! - Rendering through the [`Renderer`] trait
//!
//! # Example Flow
//!
//! ```text
//! [Setup] -> [Create Players] -> [Draw Board] -> [Request Move]
//!   -> [Validate & Commit] -> [Check End] -> [Draw Board] -> ...
//!   -> [Announce Result]
//! ```

use crate::agent::ai::MinimaxPlayer;
use crate::agent::human_player::HumanPlayer;
use crate::agent::player::{GameResult, Player};
use crate::console::SharedConsole;
use crate::error::GameError;
use crate::game_repr::{Action, Board, Symbol};
use crate::menu::{GameConfig, PlayerConfig};
use crate::renderer::{Renderer, TextRenderer};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Root component managing one game from the first move to the result.
///
/// Turn order is never stored: the side to move is always derived from the
/// board, so the orchestrator cannot drift out of sync with the position.
pub struct Orchestrator {
    /// The live game board
    board: Board,

    /// Player instances as (x_player, o_player)
    players: (Box<dyn Player>, Box<dyn Player>),

    renderer: Box<dyn Renderer>,

    /// Result of the game once it has ended
    game_result: Option<GameResult>,

    /// Committed moves, in order
    history: Vec<Action>,
}

impl Orchestrator {
    pub fn new(
        board: Board,
        x_player: Box<dyn Player>,
        o_player: Box<dyn Player>,
        renderer: Box<dyn Renderer>,
    ) -> Self {
        Self {
            board,
            players: (x_player, o_player),
            renderer,
            game_result: None,
            history: Vec::new(),
        }
    }

    /// Builds an empty board and both players from `config`, all talking
    /// through `console`.
    pub fn from_config(config: &GameConfig, console: SharedConsole) -> Self {
        let x_player = create_player(config, Symbol::X, &console);
        let o_player = create_player(config, Symbol::O, &console);
        let renderer = Box::new(TextRenderer::new(console));

        log::debug!("created orchestrator for {:?} on {}x{}", config.mode, config.board_size, config.board_size);

        Self::new(Board::new(config.board_size), x_player, o_player, renderer)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn game_result(&self) -> Option<GameResult> {
        self.game_result
    }

    pub fn history(&self) -> &[Action] {
        &self.history
    }

    pub fn current_turn(&self) -> Symbol {
        self.board.current_player()
    }

    /// Plays one turn. Returns the result if the game ended on this turn or
    /// had already ended.
    pub fn play_turn(&mut self) -> Result<Option<GameResult>, GameError> {
        if self.game_result.is_some() {
            return Ok(self.game_result);
        }

        // A board handed in already finished never asks for a move.
        if let Some(result) = GameResult::from_board(&self.board) {
            self.handle_game_end(result)?;
            return Ok(Some(result));
        }

        let symbol = self.current_turn();
        self.renderer.draw_board(&self.board)?;
        log::debug!("available moves for {}: {:?}", symbol, self.board.legal_actions());

        let (x_player, o_player) = &mut self.players;
        let player = match symbol {
            Symbol::X => x_player,
            Symbol::O => o_player,
        };

        let action = match player.get_move(&self.board) {
            Some(action) => action,
            None => {
                log::warn!("{} ({}) gave no move, abandoning game", player.name(), symbol);
                self.handle_game_end(GameResult::Abandoned)?;
                return Ok(Some(GameResult::Abandoned));
            }
        };

        if !self.board.is_legal(action) {
            log::warn!("{} ({}) returned illegal move {}", player.name(), symbol, action);
            self.handle_game_end(GameResult::Abandoned)?;
            return Ok(Some(GameResult::Abandoned));
        }

        self.process_move(action, symbol)?;
        self.check_game_end()
    }

    /// Plays turns until the game ends.
    pub fn run(&mut self) -> Result<GameResult, GameError> {
        loop {
            if let Some(result) = self.play_turn()? {
                return Ok(result);
            }
        }
    }

    /// Commits `action` for `symbol` and notifies the opponent.
    fn process_move(&mut self, action: Action, symbol: Symbol) -> Result<(), GameError> {
        self.board.make_move(action, symbol);
        self.history.push(action);

        let (x_player, o_player) = &mut self.players;
        let (mover, opponent) = match symbol {
            Symbol::X => (x_player, o_player),
            Symbol::O => (o_player, x_player),
        };

        log::info!("{} ({}) played {}", mover.name(), symbol, action);
        self.renderer.draw_move(mover.name(), symbol, action)?;
        opponent.opponent_moved(action);
        Ok(())
    }

    fn check_game_end(&mut self) -> Result<Option<GameResult>, GameError> {
        match GameResult::from_board(&self.board) {
            Some(result) => {
                self.handle_game_end(result)?;
                Ok(Some(result))
            }
            None => Ok(None),
        }
    }

    fn handle_game_end(&mut self, result: GameResult) -> Result<(), GameError> {
        log::info!("game over after {} moves: {:?}", self.history.len(), result);
        self.game_result = Some(result);
        self.players.0.game_ended(result);
        self.players.1.game_ended(result);
        self.renderer.draw_game_end(&self.board, result)
    }
}

fn create_player(config: &GameConfig, symbol: Symbol, console: &SharedConsole) -> Box<dyn Player> {
    match config.player(symbol) {
        PlayerConfig::Human => Box::new(HumanPlayer::new(console.clone(), format!("Player {symbol}"))),
        PlayerConfig::AI { difficulty } => {
            let engine = config.engine;
            // Distinct streams for the two sides of a seeded AIvAI game.
            let rng = match engine.seed {
                Some(seed) => StdRng::seed_from_u64(match symbol {
                    Symbol::X => seed,
                    Symbol::O => seed.wrapping_add(1),
                }),
                None => StdRng::from_entropy(),
            };

            let mut player = MinimaxPlayer::new(difficulty, "Computer".to_string(), rng)
                .with_parallel(engine.parallel);
            if let Some(depth) = engine.cutoff_depth {
                player = player.with_cutoff_depth(depth);
            }
            if let Some(plies) = engine.opening_plies {
                player = player.with_opening_plies(plies);
            }
            Box::new(player)
        }
    }
}
