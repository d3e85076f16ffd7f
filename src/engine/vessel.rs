//! Vessel definitions: bow, length, orientation and damage tracking.

use super::coordinate::Coordinate;

/// Orientation of a vessel on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Offset of segment `i` from the bow.
    fn step(self, i: i32) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (i, 0),
            Orientation::Vertical => (0, i),
        }
    }
}

/// A vessel extending `length` cells from its bow along `orientation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining: usize,
}

impl Vessel {
    /// Create an undamaged vessel. Bounds are checked only on placement.
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Self {
        Self {
            bow,
            length,
            orientation,
            remaining: length,
        }
    }

    /// Cells covered by the vessel, bow first.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coordinate> {
        let bow = self.bow;
        let orientation = self.orientation;
        (0..self.length as i32).map(move |i| {
            let (dx, dy) = orientation.step(i);
            Coordinate::new(bow.x + dx, bow.y + dy)
        })
    }

    /// Whether `shot` lands on one of the vessel's cells. Does not record damage.
    pub fn is_hit_by(&self, shot: Coordinate) -> bool {
        self.occupied_cells().any(|cell| cell == shot)
    }

    /// Record one hit. Never drops below zero.
    pub(crate) fn register_hit(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn is_destroyed(&self) -> bool {
        self.remaining == 0
    }

    /// Undamaged segments left.
    pub fn remaining_segments(&self) -> usize {
        self.remaining
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}
