//! Procedural maze generation split into parameters, random sources, and the generator itself.

pub mod params;
pub mod rng;

mod generator;

pub use generator::MazeGenerator;
pub use params::{MAX_DIMENSION, MazeParams};
pub use rng::{MazeRng, SeededRng};

use crate::error::MazeError;
use crate::grid::Grid;

pub fn generate_maze(seed: u64, params: MazeParams) -> Result<Grid, MazeError> {
    MazeGenerator::new(params)?.generate(&mut SeededRng::new(seed))
}
