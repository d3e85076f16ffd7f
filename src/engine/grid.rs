//! Grid state: cell markers, placed vessels and the shots fired against them.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};
use rand::Rng;

use super::common::{GameError, ShotResult};
use super::config::{GRID_SIZE, MAX_PLACEMENT_ATTEMPTS};
use super::coordinate::Coordinate;
use super::vessel::{Orientation, Vessel};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
}

impl Cell {
    fn marker(self, reveal_ships: bool) -> char {
        match self {
            Cell::Empty => 'O',
            Cell::Ship if reveal_ships => '■',
            Cell::Ship => 'O',
            Cell::Hit => 'X',
            Cell::Miss => 'T',
        }
    }
}

/// One side's board. Cells are indexed `cells[x][y]`.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
    vessels: Vec<Vessel>,
    shots: BTreeSet<Coordinate>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty grid with no vessels and no shots.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
            vessels: Vec::new(),
            shots: BTreeSet::new(),
        }
    }

    pub fn size(&self) -> usize {
        GRID_SIZE
    }

    /// Whether `c` lies inside `[0, size) x [0, size)`.
    pub fn contains(&self, c: Coordinate) -> bool {
        Self::index(c).is_some()
    }

    fn index(c: Coordinate) -> Option<(usize, usize)> {
        let x = usize::try_from(c.x).ok()?;
        let y = usize::try_from(c.y).ok()?;
        (x < GRID_SIZE && y < GRID_SIZE).then_some((x, y))
    }

    /// State of the cell at `c`, or `None` off the grid.
    pub fn cell(&self, c: Coordinate) -> Option<Cell> {
        Self::index(c).map(|(x, y)| self.cells[x][y])
    }

    /// Vessels in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn has_been_shot(&self, c: Coordinate) -> bool {
        self.shots.contains(&c)
    }

    /// Number of shots this grid has accepted.
    pub fn shots_fired(&self) -> usize {
        self.shots.len()
    }

    /// Check that `vessel` has a length that fits the grid and that every
    /// cell is on the grid and free.
    pub fn validate_placement(&self, vessel: &Vessel) -> Result<(), GameError> {
        if vessel.length() == 0 || vessel.length() > GRID_SIZE {
            return Err(GameError::InvalidPlacement(vessel.bow()));
        }
        for cell in vessel.occupied_cells() {
            match self.cell(cell) {
                Some(Cell::Empty) => {}
                _ => return Err(GameError::InvalidPlacement(cell)),
            }
        }
        Ok(())
    }

    /// Place `vessel`, leaving the grid untouched if any cell is invalid.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), GameError> {
        self.validate_placement(&vessel)?;
        for cell in vessel.occupied_cells() {
            if let Some((x, y)) = Self::index(cell) {
                self.cells[x][y] = Cell::Ship;
            }
        }
        log::debug!(
            "placed vessel of length {} at {} ({:?})",
            vessel.length(),
            vessel.bow(),
            vessel.orientation()
        );
        self.vessels.push(vessel);
        Ok(())
    }

    /// Draw random bows and orientations until a vessel of `length` fits.
    pub fn random_vessel<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<Vessel, GameError> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let bow = Coordinate::new(
                rng.random_range(0..GRID_SIZE as i32),
                rng.random_range(0..GRID_SIZE as i32),
            );
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let vessel = Vessel::new(bow, length, orientation);
            if self.validate_placement(&vessel).is_ok() {
                return Ok(vessel);
            }
        }
        Err(GameError::PlacementExhausted { length })
    }

    /// Randomly place one vessel per entry of `lengths`, in order.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        lengths: &[usize],
    ) -> Result<(), GameError> {
        for &length in lengths {
            let vessel = self.random_vessel(rng, length)?;
            self.place_vessel(vessel)?;
        }
        Ok(())
    }

    /// Resolve a shot at `shot`.
    pub fn fire_at(&mut self, shot: Coordinate) -> Result<ShotResult, GameError> {
        let (x, y) = Self::index(shot).ok_or(GameError::OutOfBounds(shot))?;
        if !self.shots.insert(shot) {
            return Err(GameError::DuplicateShot(shot));
        }

        // vessels never overlap, so the first match is the only one
        if let Some(vessel) = self.vessels.iter_mut().find(|v| v.is_hit_by(shot)) {
            vessel.register_hit();
            self.cells[x][y] = Cell::Hit;
            if vessel.is_destroyed() {
                log::info!("vessel of length {} destroyed", vessel.length());
                return Ok(ShotResult::Sunk);
            }
            return Ok(ShotResult::Hit);
        }

        self.cells[x][y] = Cell::Miss;
        Ok(ShotResult::Miss)
    }

    /// `true` once no vessel has an undamaged segment left.
    pub fn is_fleet_destroyed(&self) -> bool {
        self.vessels.iter().all(Vessel::is_destroyed)
    }

    /// Undamaged segments across the whole fleet.
    pub fn remaining_segments(&self) -> usize {
        self.vessels.iter().map(Vessel::remaining_segments).sum()
    }

    /// Text view of the grid. Undiscovered ships are shown only when
    /// `reveal_ships` is set.
    pub fn render(&self, reveal_ships: bool) -> String {
        let mut out = String::new();
        // writing into a String cannot fail
        let _ = self.write_grid(&mut out, reveal_ships);
        out
    }

    fn write_grid<W: Write>(&self, out: &mut W, reveal_ships: bool) -> fmt::Result {
        write!(out, " ")?;
        for y in 0..GRID_SIZE {
            write!(out, " {}", y)?;
        }
        for (x, row) in self.cells.iter().enumerate() {
            write!(out, "\n{}", x)?;
            for cell in row {
                write!(out, " {}", cell.marker(reveal_ships))?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f, true)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Grid {{ vessels: {:?}, shots: {:?} }}",
            self.vessels, self.shots
        )
    }
}
