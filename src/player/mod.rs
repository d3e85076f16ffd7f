//! Players and the console collaborators they talk through
//!
//! - AiPlayer: automated opponent firing from a shuffled move queue
//! - HumanPlayer: asks an [`Input`] for each coordinate
//! - ConsoleInput / ConsoleOutput: stdin and stdout collaborators

use crate::engine::{Coordinate, GameError};

/// Something that picks where to fire next.
pub trait Player {
    /// Choose the next target coordinate.
    fn select_target(&mut self) -> Result<Coordinate, GameError>;
}

/// Source of integers typed by the human.
pub trait Input {
    /// Show `prompt` and return the next integer. Implementations re-prompt on
    /// text that is not an integer.
    fn request_integer(&mut self, prompt: &str) -> Result<i32, GameError>;
}

/// Sink for user-facing messages and boards.
pub trait Output {
    fn render(&mut self, text: &str);
}

pub mod ai;
pub use ai::AiPlayer;

pub mod human;
pub use human::HumanPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_integer, ConsoleInput, ConsoleOutput};
