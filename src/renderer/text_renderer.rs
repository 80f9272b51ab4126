use super::Renderer;
use crate::agent::player::GameResult;
use crate::console::SharedConsole;
use crate::error::GameError;
use crate::game_repr::{Action, Board, Cell, Symbol};

/// Console renderer printing the board as a boxed grid:
///
/// ```text
/// |---|---|---|
/// | X |   | O |
/// |---|---|---|
/// ```
pub struct TextRenderer {
    console: SharedConsole,
}

impl TextRenderer {
    pub fn new(console: SharedConsole) -> Self {
        Self { console }
    }
}

fn separator(size: usize) -> String {
    let mut line = String::from("|");
    for _ in 0..size {
        line.push_str("---|");
    }
    line
}

/// Board as text, one grid row per line, followed by a blank line.
pub fn format_board(board: &Board) -> String {
    let sep = separator(board.size());
    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');

    for row in board.rows() {
        out.push('|');
        for cell in row {
            let mark = match cell {
                Cell::Empty => ' ',
                Cell::X => 'X',
                Cell::O => 'O',
            };
            out.push_str(&format!("{mark:^3}|"));
        }
        out.push('\n');
        out.push_str(&sep);
        out.push('\n');
    }

    out
}

pub fn result_message(result: GameResult) -> String {
    match result {
        GameResult::XWins => format!("Player {} wins!", Symbol::X),
        GameResult::OWins => format!("Player {} wins!", Symbol::O),
        GameResult::Draw => "It is a draw!".to_string(),
        GameResult::Abandoned => "Game abandoned.".to_string(),
    }
}

impl Renderer for TextRenderer {
    fn draw_board(&mut self, board: &Board) -> Result<(), GameError> {
        self.console.borrow_mut().write_line(&format_board(board))
    }

    fn draw_move(&mut self, player_name: &str, symbol: Symbol, action: Action) -> Result<(), GameError> {
        self.console
            .borrow_mut()
            .write_line(&format!("{player_name} ({symbol}) played in cell {action}"))
    }

    fn draw_game_end(&mut self, board: &Board, result: GameResult) -> Result<(), GameError> {
        let mut console = self.console.borrow_mut();
        console.write_line(&format_board(board))?;
        console.write_line(&result_message(result))
    }
}
