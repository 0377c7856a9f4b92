//! Screen-space placement of the maze for both modes.

use macroquad::math::{Vec2, vec2};
use maze_core::Point;

/// World units per maze cell.
pub const MAZE_SCALE: f32 = 10.0;
pub const GAME_ZOOM: f32 = 10.0;

/// Top-left screen position that centres a `grid_width` x `grid_height` maze.
pub fn editor_origin(screen: Vec2, grid_width: usize, grid_height: usize) -> Vec2 {
    vec2(
        screen.x / 2.0 - grid_width as f32 * MAZE_SCALE / 2.0,
        screen.y / 2.0 - grid_height as f32 * MAZE_SCALE / 2.0,
    )
}

/// Cell under a screen position in editor mode, if the position lies on the maze.
pub fn screen_to_cell(
    origin: Vec2,
    pointer: Vec2,
    grid_width: usize,
    grid_height: usize,
) -> Option<Point> {
    if pointer.x < origin.x || pointer.y < origin.y {
        return None;
    }
    let x = ((pointer.x - origin.x) / MAZE_SCALE) as usize;
    let y = ((pointer.y - origin.y) / MAZE_SCALE) as usize;
    (x < grid_width && y < grid_height).then(|| Point::new(x as i32, y as i32))
}

pub fn cell_world_position(cell: Point) -> Vec2 {
    vec2(cell.x as f32 * MAZE_SCALE, cell.y as f32 * MAZE_SCALE)
}

/// Follows a world-space target, keeping it at `offset` on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowCamera {
    pub target: Vec2,
    pub offset: Vec2,
    pub zoom: f32,
}

impl FollowCamera {
    pub fn centred_on(cell: Point, screen: Vec2) -> Self {
        let half_cell = vec2(MAZE_SCALE / 2.0, MAZE_SCALE / 2.0);
        Self {
            target: cell_world_position(cell) + half_cell,
            offset: screen / 2.0,
            zoom: GAME_ZOOM,
        }
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.target) * self.zoom + self.offset
    }

    pub fn cell_size(&self) -> f32 {
        MAZE_SCALE * self.zoom
    }

    /// Whether the cell's on-screen square overlaps a `screen`-sized viewport.
    pub fn is_cell_visible(&self, cell: Point, screen: Vec2) -> bool {
        let top_left = self.world_to_screen(cell_world_position(cell));
        let size = self.cell_size();
        top_left.x + size >= 0.0
            && top_left.y + size >= 0.0
            && top_left.x <= screen.x
            && top_left.y <= screen.y
    }
}
