use alloc::vec::Vec;
use rand::{seq::SliceRandom, Rng};

use crate::engine::{Coordinate, GameError, GRID_SIZE};

use super::Player;

/// Automated opponent that fires at every cell exactly once, in random order.
#[derive(Debug, Clone)]
pub struct AiPlayer {
    moves: Vec<Coordinate>,
}

impl AiPlayer {
    /// Queue every coordinate of the grid in a uniformly shuffled order.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut moves: Vec<Coordinate> = (0..GRID_SIZE as i32)
            .flat_map(|x| (0..GRID_SIZE as i32).map(move |y| Coordinate::new(x, y)))
            .collect();
        moves.shuffle(rng);
        Self { moves }
    }

    /// Use a fixed queue. Moves are taken from the end.
    pub fn from_moves(moves: Vec<Coordinate>) -> Self {
        Self { moves }
    }

    pub fn moves_remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Player for AiPlayer {
    fn select_target(&mut self) -> Result<Coordinate, GameError> {
        self.moves.pop().ok_or(GameError::MovesExhausted)
    }
}
