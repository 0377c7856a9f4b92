mod frame_input;
mod render;
mod ui_text;
mod window_config;

use std::env;

use anyhow::{Context, Result, anyhow};
use env_logger::{Builder, Env};
use log::{error, info};
use macroquad::math::vec2;
use macroquad::window::{Conf, next_frame, screen_height, screen_width};
use maze_app::app_loop::AppState;
use maze_app::seed::{generate_runtime_seed, resolve_launch_options};
use maze_app::format_seed;
use maze_core::{Session, format_fingerprint, generate_maze};

use crate::frame_input::capture_frame_input;
use crate::render::draw_frame;
use crate::window_config::build_window_conf;

fn window_conf() -> Conf {
    build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(err) = run().await {
        error!("{err:#}");
    }
}

async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let options =
        resolve_launch_options(&args, generate_runtime_seed).map_err(|err| anyhow!(err))?;
    let config = options.resolve_config().context("failed to load maze config")?;
    let grid = generate_maze(config.seed, config.maze)
        .with_context(|| format!("failed to generate maze for seed {}", config.seed))?;
    info!(
        "generated {}x{} maze, seed={} fingerprint={}",
        grid.width(),
        grid.height(),
        format_seed(config.seed),
        format_fingerprint(grid.fingerprint())
    );

    let mut app = AppState::new(Session::new(grid));
    loop {
        let screen = vec2(screen_width(), screen_height());
        let input = capture_frame_input();
        app.tick(&input, screen);
        draw_frame(&app, config.seed, screen);
        next_frame().await;
    }
}
