//! Drawing for the editor overview and the player-following game view.

use crate::ui_text::hud_lines;
use macroquad::color::{Color, GOLD, GREEN, WHITE};
use macroquad::math::{Vec2, vec2};
use macroquad::shapes::{draw_rectangle, draw_rectangle_lines};
use macroquad::text::draw_text;
use macroquad::time::get_fps;
use macroquad::window::clear_background;
use maze_app::app_loop::AppState;
use maze_app::palette::Palette;
use maze_app::view::{FollowCamera, MAZE_SCALE, cell_world_position, editor_origin};
use maze_core::{Mode, Point};

const BACKGROUND: Color = Color { r: 0.05, g: 0.05, b: 0.07, a: 1.0 };
const HUD_PAD_X: f32 = 12.0;
const HUD_PAD_Y: f32 = 24.0;
const HUD_FONT_SIZE: f32 = 20.0;
const HUD_LINE_STEP: f32 = 20.0;

pub fn draw_frame(app: &AppState, seed: u64, screen: Vec2) {
    clear_background(BACKGROUND);
    let palette = app.biome.palette();
    match app.session.mode() {
        Mode::Editor => draw_editor_view(app, &palette, screen),
        Mode::Game => draw_game_view(app, &palette, screen),
    }
    draw_hud(app, seed);
}

fn draw_editor_view(app: &AppState, palette: &Palette, screen: Vec2) {
    let grid = app.session.grid();
    let origin = editor_origin(screen, grid.width(), grid.height());
    let place = |cell: Point| origin + cell_world_position(cell);

    for pos in grid.positions() {
        let top_left = place(pos);
        let color = palette.cell_color(grid.cell(pos));
        draw_rectangle(top_left.x, top_left.y, MAZE_SCALE, MAZE_SCALE, color);
    }
    draw_markers(app, place, MAZE_SCALE);
    draw_rectangle_lines(
        origin.x,
        origin.y,
        grid.width() as f32 * MAZE_SCALE,
        grid.height() as f32 * MAZE_SCALE,
        1.0,
        WHITE,
    );
}

fn draw_game_view(app: &AppState, palette: &Palette, screen: Vec2) {
    let grid = app.session.grid();
    let camera = FollowCamera::centred_on(app.session.player(), screen);
    let size = camera.cell_size();
    let place = |cell: Point| camera.world_to_screen(cell_world_position(cell));

    for pos in grid.positions().filter(|&pos| camera.is_cell_visible(pos, screen)) {
        let top_left = place(pos);
        draw_rectangle(top_left.x, top_left.y, size, size, palette.cell_color(grid.cell(pos)));
    }
    draw_markers(app, place, size);
}

fn draw_markers(app: &AppState, place: impl Fn(Point) -> Vec2, size: f32) {
    let inset = size * 0.2;
    let exit = place(app.session.exit());
    draw_rectangle_lines(exit.x + 1.0, exit.y + 1.0, size - 2.0, size - 2.0, 2.0, GREEN);

    let player = place(app.session.player()) + vec2(inset, inset);
    draw_rectangle(player.x, player.y, size - 2.0 * inset, size - 2.0 * inset, GOLD);
}

fn draw_hud(app: &AppState, seed: u64) {
    let mut text_y = HUD_PAD_Y;
    for line in hud_lines(app, seed, get_fps()) {
        draw_text(&line, HUD_PAD_X, text_y, HUD_FONT_SIZE, WHITE);
        text_y += HUD_LINE_STEP;
    }
}
