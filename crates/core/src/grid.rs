//! Row-major cell grid shared by the generator, the game session, and renderers.

use std::fmt;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::error::MazeError;
use crate::types::{Cell, Point};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

/// Unchecked serialized shape; converted into a `Grid` only when the cell count matches.
#[derive(Deserialize)]
struct GridRepr {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl TryFrom<GridRepr> for Grid {
    type Error = MazeError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        let expected = repr.width.checked_mul(repr.height).unwrap_or(usize::MAX);
        if repr.cells.len() != expected {
            return Err(MazeError::CellCountMismatch {
                width: repr.width,
                height: repr.height,
                expected,
                actual: repr.cells.len(),
            });
        }
        Ok(Self { width: repr.width, height: repr.height, cells: repr.cells })
    }
}

/// Format a fingerprint as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_fingerprint(fingerprint: u64) -> String {
    format!("0x{fingerprint:016x}")
}

impl Grid {
    pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
        Self { width, height, cells: vec![cell; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn in_bounds(&self, pos: Point) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn is_border(&self, pos: Point) -> bool {
        self.in_bounds(pos)
            && (pos.x == 0
                || pos.y == 0
                || pos.x as usize == self.width - 1
                || pos.y as usize == self.height - 1)
    }

    pub fn get(&self, pos: Point) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Cells outside the grid read as walls.
    pub fn cell(&self, pos: Point) -> Cell {
        self.get(pos).unwrap_or(Cell::Wall)
    }

    /// Returns false when `pos` is outside the grid.
    pub fn set(&mut self, pos: Point, cell: Cell) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn fill_border(&mut self, cell: Cell) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        for x in 0..self.width {
            self.cells[x] = cell;
            self.cells[(self.height - 1) * self.width + x] = cell;
        }
        for y in 0..self.height {
            self.cells[y * self.width] = cell;
            self.cells[y * self.width + (self.width - 1)] = cell;
        }
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Point::new(x as i32, y as i32)))
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.cells.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for cell in &self.cells {
            bytes.push(match cell {
                Cell::Wall => 0,
                Cell::Floor => 1,
                Cell::Item => 2,
            });
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    /// Walkable cell closest to `desired`, ties going to the lowest `(y, x)`.
    pub fn nearest_walkable(&self, desired: Point) -> Option<Point> {
        if self.cell(desired).is_walkable() {
            return Some(desired);
        }
        let mut best = None;
        let mut best_distance = u32::MAX;
        for pos in self.positions() {
            if !self.cell(pos).is_walkable() {
                continue;
            }
            let distance = pos.manhattan(desired);
            if distance < best_distance {
                best = Some(pos);
                best_distance = distance;
            }
        }
        best
    }

    /// Walkable cell farthest from `origin`, ties going to the highest `(y, x)`.
    pub fn farthest_walkable(&self, origin: Point) -> Option<Point> {
        let mut best = None;
        let mut best_distance = 0_u32;
        for pos in self.positions() {
            if !self.cell(pos).is_walkable() {
                continue;
            }
            let distance = pos.manhattan(origin);
            if best.is_none() || distance >= best_distance {
                best = Some(pos);
                best_distance = distance;
            }
        }
        best
    }

    fn index(&self, pos: Point) -> Option<usize> {
        self.in_bounds(pos).then(|| (pos.y as usize) * self.width + (pos.x as usize))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            for cell in row {
                let glyph = match cell {
                    Cell::Wall => '#',
                    Cell::Floor => '.',
                    Cell::Item => '*',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bordered(width: usize, height: usize) -> Grid {
        let mut grid = Grid::filled(width, height, Cell::Floor);
        grid.fill_border(Cell::Wall);
        grid
    }

    #[test]
    fn out_of_bounds_reads_as_wall_and_writes_are_ignored() {
        let mut grid = bordered(4, 4);
        assert_eq!(grid.cell(Point::new(-1, 2)), Cell::Wall);
        assert_eq!(grid.get(Point::new(4, 0)), None);
        assert!(!grid.set(Point::new(0, 9), Cell::Floor));
    }

    #[test]
    fn border_detection_covers_all_four_edges() {
        let grid = bordered(5, 4);
        for pos in grid.positions() {
            let on_edge = pos.x == 0 || pos.y == 0 || pos.x == 4 || pos.y == 3;
            assert_eq!(grid.is_border(pos), on_edge, "{pos:?}");
            assert_eq!(grid.cell(pos) == Cell::Wall, on_edge, "{pos:?}");
        }
    }

    #[test]
    fn nearest_walkable_prefers_lowest_y_then_x_for_tie_breaks() {
        let mut grid = Grid::filled(7, 7, Cell::Wall);
        grid.set(Point::new(3, 2), Cell::Floor);
        grid.set(Point::new(2, 3), Cell::Floor);

        assert_eq!(grid.nearest_walkable(Point::new(1, 1)), Some(Point::new(3, 2)));
    }

    #[test]
    fn farthest_walkable_skips_walls() {
        let mut grid = bordered(6, 6);
        grid.set(Point::new(4, 4), Cell::Wall);
        assert_eq!(grid.farthest_walkable(Point::new(1, 1)), Some(Point::new(3, 4)));
    }

    #[test]
    fn walled_grid_has_no_walkable_cell() {
        let grid = Grid::filled(3, 3, Cell::Wall);
        assert_eq!(grid.nearest_walkable(Point::new(1, 1)), None);
        assert_eq!(grid.farthest_walkable(Point::new(1, 1)), None);
    }

    #[test]
    fn display_renders_one_line_per_row() {
        let mut grid = bordered(4, 3);
        grid.set(Point::new(1, 1), Cell::Item);
        assert_eq!(grid.to_string(), "####\n#*.#\n####\n");
    }

    #[test]
    fn deserialize_rejects_cell_count_mismatch() {
        let err = serde_json::from_str::<Grid>(r#"{"width":5,"height":5,"cells":[]}"#)
            .expect_err("empty cells for a 5x5 grid must be rejected");
        assert!(err.to_string().contains("needs 25 cells, got 0"), "{err}");
    }

    #[test]
    fn serialized_grid_deserializes_to_the_same_grid() {
        let mut grid = bordered(4, 3);
        grid.set(Point::new(2, 1), Cell::Item);
        let json = serde_json::to_string(&grid).expect("serialize");
        let restored: Grid = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, grid);
        assert_eq!(restored.get(Point::new(2, 1)), Some(Cell::Item));
    }

    #[test]
    fn format_fingerprint_is_16_hex_digits() {
        assert_eq!(format_fingerprint(0), "0x0000000000000000");
        assert_eq!(format_fingerprint(255), "0x00000000000000ff");
        assert_eq!(format_fingerprint(u64::MAX), "0xffffffffffffffff");
        assert_eq!(format_fingerprint(0xDEAD_BEEF), "0x00000000deadbeef");
    }

    #[test]
    fn fingerprint_tracks_cell_changes() {
        let mut grid = bordered(5, 5);
        let before = grid.fingerprint();
        grid.set(Point::new(2, 2), Cell::Wall);
        assert_ne!(before, grid.fingerprint());
    }
}
