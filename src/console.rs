//! Line-oriented console shared by the menu, human players and the renderer.
//!
//! The console is shared through `Rc<RefCell<>>`, the same way the board is
//! shared between orchestrator and players: everything runs on one thread,
//! and each borrow lasts for a single prompt or write.

use crate::error::GameError;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

pub type SharedConsole = Rc<RefCell<Console>>;

pub struct Console {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl Console {
    pub fn new(input: impl BufRead + 'static, output: impl Write + 'static) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }

    pub fn shared(self) -> SharedConsole {
        Rc::new(RefCell::new(self))
    }

    pub fn write_line(&mut self, text: &str) -> Result<(), GameError> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    pub fn write_str(&mut self, text: &str) -> Result<(), GameError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints `text` and reads one trimmed line.
    pub fn prompt(&mut self, text: &str) -> Result<String, GameError> {
        self.write_str(text)?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Prompts until `parse` accepts the answer. Recoverable errors are shown
    /// to the user; input closure and I/O failures are returned.
    pub fn prompt_until<T>(
        &mut self,
        text: &str,
        mut parse: impl FnMut(&str) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        loop {
            let answer = self.prompt(text)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_recoverable() => {
                    self.write_line(&format!("Invalid input. {err}.\n"))?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Prompts for a number in `min..=max`.
    pub fn prompt_number(&mut self, text: &str, min: usize, max: usize) -> Result<usize, GameError> {
        self.prompt_until(text, |answer| parse_number(answer, min, max))
    }
}

/// Parses `answer` as a number in `min..=max`.
pub fn parse_number(answer: &str, min: usize, max: usize) -> Result<usize, GameError> {
    let value: usize = answer
        .parse()
        .map_err(|_| GameError::NotANumber(answer.to_string()))?;
    if !(min..=max).contains(&value) {
        return Err(GameError::OutOfRange { value, min, max });
    }
    Ok(value)
}

/// In-memory output sink that stays readable after being handed to a
/// [`Console`]. Useful for scripted games.
#[derive(Debug, Clone, Default)]
pub struct CapturedOutput {
    buffer: Rc<RefCell<Vec<u8>>>,
}

impl CapturedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.borrow()).into_owned()
    }
}

impl Write for CapturedOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
