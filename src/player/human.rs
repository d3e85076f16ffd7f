use crate::engine::{Coordinate, GameError};

use super::{Input, Player};

/// Human player typing coordinates one axis at a time.
pub struct HumanPlayer<I: Input> {
    input: I,
}

impl<I: Input> HumanPlayer<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }
}

impl<I: Input> Player for HumanPlayer<I> {
    fn select_target(&mut self) -> Result<Coordinate, GameError> {
        let x = self.input.request_integer("Enter X coordinate: ")?;
        let y = self.input.request_integer("Enter Y coordinate: ")?;
        Ok(Coordinate::new(x, y))
    }
}
