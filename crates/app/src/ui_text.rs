//! Text formatting for the HUD lines drawn over both modes.

use maze_app::app_loop::AppState;
use maze_app::format_seed;
use maze_app::palette::Biome;
use maze_core::Mode;

pub fn status_text(mode: Mode) -> &'static str {
    match mode {
        Mode::Game => "Game (Space for editor, arrows/WASD to move)",
        Mode::Editor => "Editor (Space to play, LMB floor, RMB wall, MMB item, Ctrl+RMB exit)",
    }
}

pub fn biome_hint(current: Biome) -> String {
    let slots = Biome::ALL
        .iter()
        .enumerate()
        .map(|(index, biome)| {
            let marker = if *biome == current { "*" } else { "" };
            format!("{}={biome:?}{marker}", index + 1)
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!("Biome: {slots}")
}

pub fn hud_lines(app: &AppState, seed: u64, fps: i32) -> Vec<String> {
    let session = &app.session;
    let mut lines = vec![
        status_text(session.mode()).to_string(),
        format!("Score: {}", session.score()),
        format!("Items: {}", session.items().len()),
        biome_hint(app.biome),
        format!("Seed: {}", format_seed(seed)),
        format!("FPS: {fps}"),
    ];
    if let Some(notice) = &app.notice {
        lines.push(notice.clone());
    }
    lines
}
