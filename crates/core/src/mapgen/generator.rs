//! Grid maze generation: border initialization, anchor selection, and wall carving.

use log::{debug, trace};

use crate::error::MazeError;
use crate::grid::Grid;
use crate::types::{Cell, Direction, Point};

use super::params::MazeParams;
use super::rng::MazeRng;

pub struct MazeGenerator {
    params: MazeParams,
}

impl MazeGenerator {
    pub fn new(params: MazeParams) -> Result<Self, MazeError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &MazeParams {
        &self.params
    }

    pub fn generate<R: MazeRng + ?Sized>(&self, rng: &mut R) -> Result<Grid, MazeError> {
        let mut grid = initialize_grid(self.params.width, self.params.height);

        let anchors = select_anchors(&self.params, rng);
        for &anchor in &anchors {
            grid.set(anchor, Cell::Wall);
        }
        debug!(
            "selected {} anchors on a {}x{} grid",
            anchors.len(),
            self.params.width,
            self.params.height
        );

        let carved = carve_walls(&mut grid, &anchors, rng)?;
        debug!("carved {carved} wall cells");

        Ok(grid)
    }
}

fn initialize_grid(width: usize, height: usize) -> Grid {
    let mut grid = Grid::filled(width, height, Cell::Floor);
    grid.fill_border(Cell::Wall);
    grid
}

/// Interior cells on the spacing lattice that pass their Bernoulli draw, in scan order.
fn select_anchors<R: MazeRng + ?Sized>(params: &MazeParams, rng: &mut R) -> Vec<Point> {
    let threshold = params.chance_threshold();
    let mut anchors = Vec::new();
    for y in 1..params.height.saturating_sub(1) {
        if y % params.row_spacing != 0 {
            continue;
        }
        for x in 1..params.width.saturating_sub(1) {
            if x % params.col_spacing != 0 {
                continue;
            }
            // The draw happens even when the threshold is zero so the stream stays aligned.
            let roll = rng.random_value(0, 100);
            if threshold > 0 && roll <= threshold {
                anchors.push(Point::new(x as i32, y as i32));
            }
        }
    }
    anchors
}

fn carve_walls<R: MazeRng + ?Sized>(
    grid: &mut Grid,
    anchors: &[Point],
    rng: &mut R,
) -> Result<usize, MazeError> {
    let order = rng.random_sequence(anchors.len());
    let mut carved = 0;
    for index in order {
        let anchor = anchors[index];
        let direction = Direction::ALL[rng.random_value(0, 3) as usize];
        let steps = carve_ray(grid, anchor, direction)?;
        trace!("anchor {anchor:?} carved {steps} cells towards {direction:?}");
        carved += steps;
    }
    Ok(carved)
}

/// Walls off floor cells from `anchor` along `direction` until a non-floor cell.
fn carve_ray(grid: &mut Grid, anchor: Point, direction: Direction) -> Result<usize, MazeError> {
    let mut current = anchor.step(direction);
    let mut steps = 0;
    loop {
        match grid.get(current) {
            Some(Cell::Floor) => {
                grid.set(current, Cell::Wall);
                steps += 1;
                current = current.step(direction);
            }
            Some(_) => return Ok(steps),
            None => return Err(MazeError::BoundaryViolation { anchor, direction, at: current }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use proptest::prelude::*;

    use super::*;
    use crate::mapgen::rng::SeededRng;

    /// Replays queued draws and hands out identity permutations.
    struct ScriptedRng {
        values: VecDeque<i32>,
    }

    impl ScriptedRng {
        fn new(values: &[i32]) -> Self {
            Self { values: values.iter().copied().collect() }
        }
    }

    impl MazeRng for ScriptedRng {
        fn random_value(&mut self, min: i32, max: i32) -> i32 {
            let value = self.values.pop_front().expect("script ran out of values");
            assert!((min..=max).contains(&value), "{value} outside [{min}, {max}]");
            value
        }

        fn random_sequence(&mut self, count: usize) -> Vec<usize> {
            (0..count).collect()
        }
    }

    fn params(width: usize, height: usize, spacing: usize, point_chance: f32) -> MazeParams {
        MazeParams { width, height, row_spacing: spacing, col_spacing: spacing, point_chance }
    }

    fn walls(grid: &Grid) -> Vec<Point> {
        grid.positions().filter(|&pos| grid.cell(pos) == Cell::Wall).collect()
    }

    fn interior_walls(grid: &Grid) -> Vec<Point> {
        walls(grid).into_iter().filter(|&pos| !grid.is_border(pos)).collect()
    }

    fn assert_border_is_wall(grid: &Grid) {
        for pos in grid.positions().filter(|&pos| grid.is_border(pos)) {
            assert_eq!(grid.cell(pos), Cell::Wall, "border cell {pos:?} should be wall");
        }
    }

    #[test]
    fn single_anchor_carves_east_until_border() {
        let generator = MazeGenerator::new(params(9, 9, 4, 1.0)).expect("valid params");
        let mut rng = ScriptedRng::new(&[100, 0]);

        let grid = generator.generate(&mut rng).expect("generation succeeds");

        assert_eq!(
            interior_walls(&grid),
            vec![Point::new(4, 4), Point::new(5, 4), Point::new(6, 4), Point::new(7, 4)]
        );
        assert!(rng.values.is_empty());
    }

    #[test]
    fn carving_stops_at_existing_walls() {
        // (4,4) carves east into the anchor at (8,4), which then carves north to the border.
        let generator = MazeGenerator::new(params(13, 9, 4, 1.0)).expect("valid params");
        let mut rng = ScriptedRng::new(&[0, 0, 0, 3]);

        let grid = generator.generate(&mut rng).expect("generation succeeds");

        let expected = vec![
            Point::new(8, 1),
            Point::new(8, 2),
            Point::new(8, 3),
            Point::new(4, 4),
            Point::new(5, 4),
            Point::new(6, 4),
            Point::new(7, 4),
            Point::new(8, 4),
        ];
        assert_eq!(interior_walls(&grid), expected);
    }

    #[test]
    fn anchor_selection_scans_rows_then_columns() {
        let mut rng = ScriptedRng::new(&[0, 0, 0, 0]);
        let anchors = select_anchors(&params(10, 10, 4, 1.0), &mut rng);
        assert_eq!(
            anchors,
            vec![Point::new(4, 4), Point::new(8, 4), Point::new(4, 8), Point::new(8, 8)]
        );
    }

    #[test]
    fn anchor_selection_applies_whole_percent_threshold() {
        let mut rng = ScriptedRng::new(&[75, 76, 0, 100]);
        let anchors = select_anchors(&params(10, 10, 4, 0.75), &mut rng);
        assert_eq!(anchors, vec![Point::new(4, 4), Point::new(4, 8)]);
    }

    #[test]
    fn zero_chance_still_draws_but_selects_nothing() {
        let mut rng = ScriptedRng::new(&[0, 0, 0, 0]);
        let anchors = select_anchors(&params(10, 10, 4, 0.0), &mut rng);
        assert!(anchors.is_empty());
        assert!(rng.values.is_empty(), "every candidate consumes one draw");
    }

    #[test]
    fn zero_chance_yields_border_only_grid() {
        let generator = MazeGenerator::new(params(32, 24, 2, 0.0)).expect("valid params");
        let grid = generator.generate(&mut SeededRng::new(67_218)).expect("generation succeeds");
        assert!(interior_walls(&grid).is_empty());
        assert_border_is_wall(&grid);
    }

    #[test]
    fn tiny_grids_are_all_wall() {
        for (width, height) in [(1, 1), (2, 2), (1, 5), (7, 2)] {
            let generator = MazeGenerator::new(params(width, height, 1, 1.0)).expect("valid");
            let grid = generator.generate(&mut SeededRng::new(3)).expect("generation succeeds");
            assert_eq!(grid.count(Cell::Wall), width * height);
        }
    }

    #[test]
    fn three_by_three_with_unit_spacing_and_full_chance_is_all_wall() {
        let generator = MazeGenerator::new(params(3, 3, 1, 1.0)).expect("valid params");
        let grid = generator.generate(&mut SeededRng::new(11)).expect("generation succeeds");
        assert_eq!(grid.count(Cell::Wall), 9);
    }

    #[test]
    fn three_by_three_off_lattice_keeps_center_floor() {
        let generator = MazeGenerator::new(params(3, 3, 2, 1.0)).expect("valid params");
        let grid = generator.generate(&mut SeededRng::new(11)).expect("generation succeeds");
        assert_eq!(grid.cell(Point::new(1, 1)), Cell::Floor);
    }

    #[test]
    fn spacing_beyond_grid_leaves_interior_floor() {
        let generator = MazeGenerator::new(params(8, 8, 8, 1.0)).expect("valid params");
        let grid = generator.generate(&mut SeededRng::new(5)).expect("generation succeeds");
        assert!(interior_walls(&grid).is_empty());
    }

    #[test]
    fn carve_ray_reports_boundary_violation_without_border() {
        let mut grid = Grid::filled(5, 5, Cell::Floor);
        let err = carve_ray(&mut grid, Point::new(2, 2), Direction::West)
            .expect_err("missing border should fault");
        assert_eq!(
            err,
            MazeError::BoundaryViolation {
                anchor: Point::new(2, 2),
                direction: Direction::West,
                at: Point::new(-1, 2),
            }
        );
    }

    #[test]
    fn same_seed_produces_identical_grids() {
        let generator = MazeGenerator::new(MazeParams::default()).expect("valid params");
        let a = generator.generate(&mut SeededRng::new(67_218)).expect("generation succeeds");
        let b = generator.generate(&mut SeededRng::new(67_218)).expect("generation succeeds");
        assert_eq!(a, b);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn different_seeds_produce_different_grids() {
        let generator = MazeGenerator::new(MazeParams::default()).expect("valid params");
        let a = generator.generate(&mut SeededRng::new(67_218)).expect("generation succeeds");
        let b = generator.generate(&mut SeededRng::new(67_219)).expect("generation succeeds");
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn default_maze_has_interior_walls_and_floor() {
        let generator = MazeGenerator::new(MazeParams::default()).expect("valid params");
        let grid = generator.generate(&mut SeededRng::new(67_218)).expect("generation succeeds");
        assert!(!interior_walls(&grid).is_empty());
        assert!(grid.count(Cell::Floor) > grid.count(Cell::Wall));
        assert_eq!(grid.count(Cell::Item), 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]
        #[test]
        fn generated_grids_keep_border_anchor_and_item_invariants(
            seed in any::<u64>(),
            width in 1_usize..48,
            height in 1_usize..48,
            row_spacing in 1_usize..6,
            col_spacing in 1_usize..6,
            percent in 0_u8..=100,
        ) {
            let params = MazeParams {
                width,
                height,
                row_spacing,
                col_spacing,
                point_chance: f32::from(percent) / 100.0,
            };
            let generator = MazeGenerator::new(params).expect("valid params");
            let grid = generator.generate(&mut SeededRng::new(seed)).expect("generation succeeds");

            for pos in grid.positions().filter(|&pos| grid.is_border(pos)) {
                prop_assert_eq!(grid.cell(pos), Cell::Wall);
            }
            prop_assert_eq!(grid.count(Cell::Item), 0);

            // Anchors are the first draws of the stream, so a fresh rng reproduces them.
            let anchors = select_anchors(&params, &mut SeededRng::new(seed));
            for anchor in anchors {
                prop_assert_eq!(grid.cell(anchor), Cell::Wall, "anchor {:?}", anchor);
            }
        }

        #[test]
        fn carving_walks_terminate_within_grid_extent(
            seed in any::<u64>(),
            width in 3_usize..40,
            height in 3_usize..40,
        ) {
            let params = MazeParams { width, height, row_spacing: 2, col_spacing: 2, point_chance: 1.0 };
            let mut rng = SeededRng::new(seed);
            let mut grid = initialize_grid(width, height);
            let anchors = select_anchors(&params, &mut rng);
            for &anchor in &anchors {
                grid.set(anchor, Cell::Wall);
            }
            let limit = width.max(height);
            for anchor in anchors {
                for direction in Direction::ALL {
                    let steps = carve_ray(&mut grid.clone(), anchor, direction)
                        .expect("border bounds every walk");
                    prop_assert!(steps <= limit);
                }
            }
        }
    }
}
