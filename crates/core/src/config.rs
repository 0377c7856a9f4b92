//! TOML configuration for a generation run.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::mapgen::MazeParams;

pub const DEFAULT_SEED: u64 = 67_218;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub seed: u64,
    pub maze: MazeParams,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED, maze: MazeParams::default() }
    }
}

impl MazeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.maze.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
