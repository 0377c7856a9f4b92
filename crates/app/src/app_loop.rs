use log::{debug, info};
use macroquad::math::Vec2;
use macroquad::prelude::KeyCode;
use maze_core::{Direction, EditOutcome, EditTool, Mode, MoveOutcome, Session};

use crate::palette::Biome;
use crate::view::{editor_origin, screen_to_cell};

/// Frames between repeated steps while a direction key is held.
pub const MOVE_REPEAT_FRAMES: u32 = 8;

const BIOME_KEYS: [KeyCode; 4] = [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerAction {
    pub tool: EditTool,
    pub screen: Vec2,
}

/// Everything the simulation needs from one rendered frame of input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub keys_pressed: Vec<KeyCode>,
    pub held_direction: Option<Direction>,
    pub pointer: Option<PointerAction>,
}

pub struct AppState {
    pub session: Session,
    pub biome: Biome,
    pub move_cooldown: u32,
    /// Last message worth showing in the HUD (edit rejections, exit reached).
    pub notice: Option<String>,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        Self { session, biome: Biome::default(), move_cooldown: 0, notice: None }
    }

    /// Process input and logic for a single frame. `screen` is the window size in pixels.
    pub fn tick(&mut self, input: &FrameInput, screen: Vec2) {
        if input.keys_pressed.contains(&KeyCode::Space) {
            let mode = self.session.toggle_mode();
            self.move_cooldown = 0;
            info!("switched to {mode:?} mode");
        }

        for (slot, key) in BIOME_KEYS.iter().enumerate() {
            if input.keys_pressed.contains(key)
                && let Some(biome) = Biome::from_slot(slot + 1)
            {
                self.biome = biome;
            }
        }

        match self.session.mode() {
            Mode::Game => self.handle_movement(input.held_direction),
            Mode::Editor => {
                if let Some(pointer) = input.pointer {
                    self.handle_pointer(pointer, screen);
                }
            }
        }
    }

    fn handle_movement(&mut self, held_direction: Option<Direction>) {
        let Some(direction) = held_direction else {
            self.move_cooldown = 0;
            return;
        };
        if self.move_cooldown > 0 {
            self.move_cooldown -= 1;
            return;
        }

        self.move_cooldown = MOVE_REPEAT_FRAMES;
        match self.session.step_player(direction) {
            MoveOutcome::ReachedExit => {
                self.notice = Some(format!("Exit reached! Score {}", self.session.score()));
            }
            MoveOutcome::PickedItem { score } => {
                self.notice = Some(format!("Item collected, score {score}"));
            }
            MoveOutcome::Blocked | MoveOutcome::Moved | MoveOutcome::Finished => {}
        }
    }

    fn handle_pointer(&mut self, pointer: PointerAction, screen: Vec2) {
        let grid = self.session.grid();
        let (width, height) = (grid.width(), grid.height());
        let origin = editor_origin(screen, width, height);
        let Some(cell) = screen_to_cell(origin, pointer.screen, width, height) else {
            return;
        };

        match self.session.apply_edit(pointer.tool, cell) {
            Ok(EditOutcome::Changed) => self.notice = None,
            Ok(EditOutcome::Unchanged) => {}
            Err(err) => {
                debug!("edit rejected: {err}");
                self.notice = Some(err.to_string());
            }
        }
    }
}
