//! Common types for the engine: shot results and errors.

use alloc::string::String;
use thiserror::Error;

use super::coordinate::Coordinate;

/// Outcome of a shot that the grid accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot struck a vessel that still has undamaged segments.
    Hit,
    /// Shot struck open water.
    Miss,
    /// Shot struck the last undamaged segment of a vessel.
    Sunk,
}

impl ShotResult {
    /// `true` for any shot that struck a vessel.
    pub fn is_hit(self) -> bool {
        matches!(self, ShotResult::Hit | ShotResult::Sunk)
    }
}

/// Errors returned by grid, player and console operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Shot at {0} is outside the grid")]
    OutOfBounds(Coordinate),
    #[error("Already fired at {0}")]
    DuplicateShot(Coordinate),
    /// Carries the first cell that left the grid or overlapped another vessel.
    #[error("Vessel cannot be placed: cell {0} is off the grid or occupied")]
    InvalidPlacement(Coordinate),
    #[error("'{0}' is not a whole number")]
    InvalidInput(String),
    #[error("Unable to place a vessel of length {length}")]
    PlacementExhausted { length: usize },
    #[error("Automated opponent has no moves left")]
    MovesExhausted,
    #[error("Input closed before the game finished")]
    InputClosed,
    #[error("I/O error: {0}")]
    Io(String),
}
