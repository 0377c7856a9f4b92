pub mod app_loop;
pub mod palette;
pub mod seed;
pub mod view;

pub const APP_NAME: &str = "Maze Game";

/// Format a seed as an exact decimal string with no prefix or suffix.
pub fn format_seed(seed: u64) -> String {
    seed.to_string()
}
