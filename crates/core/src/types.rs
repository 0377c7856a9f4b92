use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(self, direction: Direction) -> Self {
        let offset = direction.offset();
        Self { x: self.x + offset.x, y: self.y + offset.y }
    }

    pub fn manhattan(self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Cardinal directions in the order the generator draws them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    East,
    West,
    South,
    North,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::East, Direction::West, Direction::South, Direction::North];

    pub const fn offset(self) -> Point {
        match self {
            Direction::East => Point::new(1, 0),
            Direction::West => Point::new(-1, 0),
            Direction::South => Point::new(0, 1),
            Direction::North => Point::new(0, -1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Floor,
    Item,
}

impl Cell {
    pub fn is_walkable(self) -> bool {
        matches!(self, Cell::Floor | Cell::Item)
    }
}
