//! Keyboard and mouse input collection for one rendered frame.

use macroquad::input::{
    KeyCode, MouseButton, is_key_down, is_key_pressed, is_mouse_button_down, mouse_position,
};
use macroquad::math::vec2;
use maze_app::app_loop::{FrameInput, PointerAction};
use maze_core::{Direction, EditTool};

const ACTION_KEYS: [KeyCode; 5] =
    [KeyCode::Space, KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4];

const DIRECTION_KEYS: [(KeyCode, KeyCode, Direction); 4] = [
    (KeyCode::Right, KeyCode::D, Direction::East),
    (KeyCode::Left, KeyCode::A, Direction::West),
    (KeyCode::Down, KeyCode::S, Direction::South),
    (KeyCode::Up, KeyCode::W, Direction::North),
];

pub fn capture_frame_input() -> FrameInput {
    let keys_pressed = ACTION_KEYS.into_iter().filter(|&key| is_key_pressed(key)).collect();

    let held_direction = DIRECTION_KEYS
        .iter()
        .find(|(arrow, letter, _)| is_key_down(*arrow) || is_key_down(*letter))
        .map(|&(_, _, direction)| direction);

    let ctrl_down = is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl);
    let tool = if is_mouse_button_down(MouseButton::Left) {
        Some(EditTool::Floor)
    } else if is_mouse_button_down(MouseButton::Right) {
        Some(if ctrl_down { EditTool::Exit } else { EditTool::Wall })
    } else if is_mouse_button_down(MouseButton::Middle) {
        Some(EditTool::Item)
    } else {
        None
    };
    let pointer = tool.map(|tool| {
        let (x, y) = mouse_position();
        PointerAction { tool, screen: vec2(x, y) }
    });

    FrameInput { keys_pressed, held_direction, pointer }
}
