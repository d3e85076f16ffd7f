//! Commonly used types and utilities for ease of import.

pub use crate::{AiPlayer, Coordinate, Game, GameError, GameStatus, Grid, HumanPlayer, Player};

#[cfg(feature = "std")]
pub use crate::{init_logging, ConsoleInput, ConsoleOutput};
