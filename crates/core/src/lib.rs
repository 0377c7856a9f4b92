pub mod config;
pub mod editor;
pub mod error;
pub mod grid;
pub mod items;
pub mod mapgen;
pub mod session;
pub mod types;

pub use config::{DEFAULT_SEED, MazeConfig};
pub use editor::{EditOutcome, EditTool};
pub use error::{ConfigError, EditError, MazeError};
pub use grid::{Grid, format_fingerprint};
pub use items::{Item, ItemId, ItemRegistry, MAX_ITEMS};
pub use mapgen::{MazeGenerator, MazeParams, MazeRng, SeededRng, generate_maze};
pub use session::{ITEM_SCORE, Mode, MoveOutcome, Session};
pub use types::*;
