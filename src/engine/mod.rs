//! Core battleship engine (no_std compatible)
//!
//! Pure game rules: coordinates, vessels, grids and the match loop. Needs only
//! `alloc`, `rand` and the `log` facade, so it builds without the `std` feature.

pub mod common;
pub mod config;
pub mod coordinate;
pub mod game;
pub mod grid;
pub mod vessel;

// Re-export commonly used types
pub use common::{GameError, ShotResult};
pub use config::*;
pub use coordinate::Coordinate;
pub use game::{Game, GameStatus};
pub use grid::{Cell, Grid};
pub use vessel::{Orientation, Vessel};
