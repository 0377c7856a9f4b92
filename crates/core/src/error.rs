use std::io;

use thiserror::Error;

use crate::mapgen::MAX_DIMENSION;
use crate::types::{Direction, Point};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MazeError {
    #[error(
        "maze dimensions must lie between 1x1 and {max}x{max}, got {width}x{height}",
        max = MAX_DIMENSION
    )]
    InvalidDimensions { width: usize, height: usize },
    #[error("row and column spacing must be positive, got rows={rows} cols={cols}")]
    InvalidSpacing { rows: usize, cols: usize },
    #[error("point chance must lie in [0, 1], got {0}")]
    InvalidPointChance(f32),
    #[error("carving from {anchor:?} towards {direction:?} left the grid at {at:?}")]
    BoundaryViolation { anchor: Point, direction: Direction, at: Point },
    #[error("a {width}x{height} grid needs {expected} cells, got {actual}")]
    CellCountMismatch { width: usize, height: usize, expected: usize, actual: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("cell {0:?} is outside the maze")]
    OutOfBounds(Point),
    #[error("border cell {0:?} is always a wall")]
    BorderLocked(Point),
    #[error("cannot place more than {0} items")]
    ItemLimit(usize),
    #[error("cell {0:?} is occupied by the player or the exit")]
    Occupied(Point),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid maze parameters: {0}")]
    Invalid(#[from] MazeError),
}
