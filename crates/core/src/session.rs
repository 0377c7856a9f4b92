//! Game-mode state: the player walking a generated grid, collecting items, and reaching the exit.

use log::info;

use crate::grid::Grid;
use crate::items::ItemRegistry;
use crate::types::{Cell, Direction, Point};

pub const ITEM_SCORE: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    Game,
    #[default]
    Editor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Blocked,
    Moved,
    PickedItem { score: u32 },
    ReachedExit,
    Finished,
}

#[derive(Clone, Debug)]
pub struct Session {
    pub(crate) grid: Grid,
    pub(crate) items: ItemRegistry,
    pub(crate) player: Point,
    pub(crate) exit: Point,
    score: u32,
    mode: Mode,
    finished: bool,
}

impl Session {
    pub fn new(grid: Grid) -> Self {
        let start_hint = Point::new(1, 1);
        let start = grid.nearest_walkable(start_hint).unwrap_or(start_hint);

        let exit_hint = Point::new(grid.width() as i32 - 2, grid.height() as i32 - 2);
        let mut exit = grid.nearest_walkable(exit_hint).unwrap_or(exit_hint);
        if exit == start {
            exit = grid.farthest_walkable(start).unwrap_or(exit);
        }

        Self {
            grid,
            items: ItemRegistry::new(),
            player: start,
            exit,
            score: 0,
            mode: Mode::default(),
            finished: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn items(&self) -> &ItemRegistry {
        &self.items
    }

    pub fn player(&self) -> Point {
        self.player
    }

    pub fn exit(&self) -> Point {
        self.exit
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = match self.mode {
            Mode::Game => Mode::Editor,
            Mode::Editor => Mode::Game,
        };
        self.mode
    }

    pub fn step_player(&mut self, direction: Direction) -> MoveOutcome {
        if self.finished {
            return MoveOutcome::Finished;
        }

        let target = self.player.step(direction);
        let cell = self.grid.cell(target);
        if !cell.is_walkable() {
            return MoveOutcome::Blocked;
        }
        self.player = target;

        if target == self.exit {
            self.finished = true;
            info!("exit reached at {target:?} with score {}", self.score);
            return MoveOutcome::ReachedExit;
        }

        if cell == Cell::Item && self.items.remove_at(&mut self.grid, target).is_some() {
            self.score += ITEM_SCORE;
            info!("picked item at {target:?}, score {}", self.score);
            return MoveOutcome::PickedItem { score: self.score };
        }

        MoveOutcome::Moved
    }
}
