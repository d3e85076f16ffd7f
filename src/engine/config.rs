/// Width and height of every grid.
pub const GRID_SIZE: usize = 6;
/// Number of vessels in a fleet.
pub const NUM_VESSELS: usize = 4;
/// Vessel lengths placed on each side, in placement order.
pub const FLEET: [usize; NUM_VESSELS] = [3, 2, 2, 1];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1;

/// Random placement gives up on a vessel after this many rejected positions.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;
