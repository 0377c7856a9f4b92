use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use maze_core::{Cell, Grid, MazeConfig, MazeParams, format_fingerprint, generate_maze};
use serde::Serialize;

/// Generate a maze from a seed and print it as ASCII or JSON.
#[derive(Parser, Debug)]
#[command(name = "mazegen", author, version, about, long_about = None)]
struct Args {
    /// TOML config with `seed` and a `[maze]` table; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long)]
    seed: Option<u64>,
    #[arg(long)]
    width: Option<usize>,
    #[arg(long)]
    height: Option<usize>,
    #[arg(long)]
    row_spacing: Option<usize>,
    #[arg(long)]
    col_spacing: Option<usize>,
    #[arg(long)]
    point_chance: Option<f32>,
    /// Print a JSON document instead of ASCII rows
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct MazeReport<'a> {
    seed: u64,
    params: MazeParams,
    fingerprint: String,
    grid: &'a Grid,
}

fn resolve_config(args: &Args) -> Result<MazeConfig> {
    let mut config = match &args.config {
        Some(path) => MazeConfig::load(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => MazeConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    let maze = &mut config.maze;
    maze.width = args.width.unwrap_or(maze.width);
    maze.height = args.height.unwrap_or(maze.height);
    maze.row_spacing = args.row_spacing.unwrap_or(maze.row_spacing);
    maze.col_spacing = args.col_spacing.unwrap_or(maze.col_spacing);
    maze.point_chance = args.point_chance.unwrap_or(maze.point_chance);
    Ok(config)
}

fn render(config: &MazeConfig, grid: &Grid, json: bool) -> Result<String> {
    let fingerprint = format_fingerprint(grid.fingerprint());
    if json {
        let report = MazeReport { seed: config.seed, params: config.maze, fingerprint, grid };
        return serde_json::to_string_pretty(&report).context("Failed to serialize maze");
    }
    Ok(format!("{grid}Seed: {}\nFingerprint: {fingerprint}\n", config.seed))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = resolve_config(&args)?;
    let grid = generate_maze(config.seed, config.maze)
        .with_context(|| format!("Maze generation failed for seed {}", config.seed))?;
    info!(
        "generated {}x{} maze with {} wall cells",
        grid.width(),
        grid.height(),
        grid.count(Cell::Wall)
    );

    print!("{}", render(&config, &grid, args.json)?);
    Ok(())
}
