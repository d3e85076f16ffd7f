#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;

use crate::engine::GameError;

use super::{Input, Output};

/// Parse a whole number typed at the console.
pub fn parse_integer(text: &str) -> Result<i32, GameError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| GameError::InvalidInput(text.to_string()))
}

fn io_error(err: io::Error) -> GameError {
    GameError::Io(err.to_string())
}

/// Line-oriented [`Input`] over any reader, echoing prompts to `writer`.
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<StdinLock<'static>, Stdout> {
    /// Read from stdin and prompt on stdout.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Input for ConsoleInput<R, W> {
    fn request_integer(&mut self, prompt: &str) -> Result<i32, GameError> {
        loop {
            write!(self.writer, "{}", prompt).map_err(io_error)?;
            self.writer.flush().map_err(io_error)?;

            let mut line = String::new();
            if self.reader.read_line(&mut line).map_err(io_error)? == 0 {
                return Err(GameError::InputClosed);
            }
            match parse_integer(&line) {
                Ok(value) => return Ok(value),
                Err(err) => writeln!(self.writer, "{}", err).map_err(io_error)?,
            }
        }
    }
}

/// [`Output`] printing each message on its own line of stdout.
pub struct ConsoleOutput;

impl Output for ConsoleOutput {
    fn render(&mut self, text: &str) {
        std::println!("{}", text);
    }
}
