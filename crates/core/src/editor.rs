//! Editor-mode cell painting. Edits never touch the border, keeping it a solid wall.

use log::debug;

use crate::error::EditError;
use crate::session::Session;
use crate::types::{Cell, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTool {
    Floor,
    Wall,
    Item,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Changed,
    Unchanged,
}

impl Session {
    pub fn apply_edit(&mut self, tool: EditTool, pos: Point) -> Result<EditOutcome, EditError> {
        if !self.grid.in_bounds(pos) {
            return Err(EditError::OutOfBounds(pos));
        }
        if self.grid.is_border(pos) {
            return Err(EditError::BorderLocked(pos));
        }

        let blocks_occupant = matches!(tool, EditTool::Wall | EditTool::Item);
        if (blocks_occupant && (pos == self.player || pos == self.exit))
            || (tool == EditTool::Exit && pos == self.player)
        {
            return Err(EditError::Occupied(pos));
        }

        let before = self.grid.cell(pos);
        let previous_exit = self.exit;
        if before == Cell::Item && tool != EditTool::Item {
            self.items.remove_at(&mut self.grid, pos);
        }

        match tool {
            EditTool::Floor => {
                self.grid.set(pos, Cell::Floor);
            }
            EditTool::Wall => {
                self.grid.set(pos, Cell::Wall);
            }
            EditTool::Item => {
                self.items.place(&mut self.grid, pos)?;
            }
            EditTool::Exit => {
                self.grid.set(pos, Cell::Floor);
                self.exit = pos;
            }
        }

        let changed = self.grid.cell(pos) != before || self.exit != previous_exit;
        if changed {
            debug!("edit {tool:?} at {pos:?}");
            Ok(EditOutcome::Changed)
        } else {
            Ok(EditOutcome::Unchanged)
        }
    }
}
