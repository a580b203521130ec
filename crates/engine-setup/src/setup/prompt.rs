//! Console yes/no prompt

use crate::error::{Result, SetupError};
use std::io::{self, BufRead, Write};

/// Asks the user to confirm an action.
pub trait Prompt {
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Line-oriented prompt over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process's stdin/stdout.
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

/// Interpret one answer line: `Some(true)` for y…, `Some(false)` for n…, `None` otherwise.
fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('y') => Some(true),
        Some('n') => Some(false),
        _ => None,
    }
}

impl<R: BufRead, W: Write> Prompt for Console<R, W> {
    /// Re-asks until an answer starts with `y` or `n`. End of input means no.
    fn confirm(&mut self, question: &str) -> Result<bool> {
        writeln!(self.output, "{}", question).map_err(SetupError::Prompt)?;
        loop {
            write!(self.output, "[Y/N]: ").map_err(SetupError::Prompt)?;
            self.output.flush().map_err(SetupError::Prompt)?;

            let mut line = String::new();
            let read = self.input.read_line(&mut line).map_err(SetupError::Prompt)?;
            if read == 0 {
                tracing::debug!("console closed, treating as no");
                writeln!(self.output).map_err(SetupError::Prompt)?;
                return Ok(false);
            }
            if let Some(answer) = parse_answer(&line) {
                return Ok(answer);
            }
        }
    }
}
