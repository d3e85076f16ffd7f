use std::collections::HashSet;

use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use skirmish::{Coordinate, GameError, Grid, Orientation, Vessel, FLEET, GRID_SIZE};

fn random_grid(seed: u64) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut grid = Grid::new();
    grid.place_fleet_randomly(&mut rng, &FLEET).unwrap();
    grid
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cells_follow_orientation(
        x in -3i32..9,
        y in -3i32..9,
        length in 1usize..6,
        orient in orientation(),
    ) {
        let vessel = Vessel::new(Coordinate::new(x, y), length, orient);
        let cells: Vec<_> = vessel.occupied_cells().collect();
        prop_assert_eq!(cells.len(), length);
        prop_assert_eq!(cells[0], Coordinate::new(x, y));
        for pair in cells.windows(2) {
            let (dx, dy) = (pair[1].x - pair[0].x, pair[1].y - pair[0].y);
            match orient {
                Orientation::Horizontal => prop_assert_eq!((dx, dy), (1, 0)),
                Orientation::Vertical => prop_assert_eq!((dx, dy), (0, 1)),
            }
        }
    }

    #[test]
    fn placed_vessels_never_overlap(
        attempts in prop::collection::vec((0i32..6, 0i32..6, 1usize..4, orientation()), 0..20),
    ) {
        let mut grid = Grid::new();
        for (x, y, length, orient) in attempts {
            let _ = grid.place_vessel(Vessel::new(Coordinate::new(x, y), length, orient));
        }
        let mut seen = HashSet::new();
        for vessel in grid.vessels() {
            for cell in vessel.occupied_cells() {
                prop_assert!(grid.contains(cell));
                prop_assert!(seen.insert(cell), "cell {} covered twice", cell);
            }
        }
    }

    #[test]
    fn second_shot_is_duplicate(
        seed in any::<u64>(),
        x in 0..GRID_SIZE as i32,
        y in 0..GRID_SIZE as i32,
    ) {
        let mut grid = random_grid(seed);
        let shot = Coordinate::new(x, y);
        grid.fire_at(shot).unwrap();
        let after_first = grid.clone();
        prop_assert_eq!(grid.fire_at(shot).unwrap_err(), GameError::DuplicateShot(shot));
        prop_assert_eq!(grid, after_first);
    }

    #[test]
    fn remaining_segments_only_decrease(seed in any::<u64>()) {
        let mut grid = random_grid(seed);
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
        let mut previous: Vec<usize> =
            grid.vessels().iter().map(|v| v.remaining_segments()).collect();
        for _ in 0..40 {
            let shot = Coordinate::new(
                rng.random_range(0..GRID_SIZE as i32),
                rng.random_range(0..GRID_SIZE as i32),
            );
            let _ = grid.fire_at(shot);
            let current: Vec<usize> =
                grid.vessels().iter().map(|v| v.remaining_segments()).collect();
            for (now, before) in current.iter().zip(&previous) {
                prop_assert!(now <= before);
            }
            prop_assert_eq!(grid.is_fleet_destroyed(), grid.remaining_segments() == 0);
            previous = current;
        }
    }
}
