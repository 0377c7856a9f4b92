//! Generation parameters and their validation.

use serde::{Deserialize, Serialize};

use crate::error::MazeError;

pub const MAX_DIMENSION: usize = 4096;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeParams {
    pub width: usize,
    pub height: usize,
    pub row_spacing: usize,
    pub col_spacing: usize,
    /// Probability that a candidate cell becomes an anchor.
    pub point_chance: f32,
}

impl Default for MazeParams {
    fn default() -> Self {
        Self { width: 64, height: 64, row_spacing: 4, col_spacing: 4, point_chance: 0.75 }
    }
}

impl MazeParams {
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.width == 0
            || self.height == 0
            || self.width > MAX_DIMENSION
            || self.height > MAX_DIMENSION
        {
            return Err(MazeError::InvalidDimensions { width: self.width, height: self.height });
        }
        if self.row_spacing == 0 || self.col_spacing == 0 {
            return Err(MazeError::InvalidSpacing {
                rows: self.row_spacing,
                cols: self.col_spacing,
            });
        }
        if !(0.0..=1.0).contains(&self.point_chance) {
            return Err(MazeError::InvalidPointChance(self.point_chance));
        }
        Ok(())
    }

    /// Whole-percent threshold compared against a draw in `[0, 100]`.
    pub fn chance_threshold(&self) -> i32 {
        (self.point_chance * 100.0) as i32
    }
}
