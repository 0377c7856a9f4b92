//! Collectible items placed on the grid by the editor.

use slotmap::{SlotMap, new_key_type};

use crate::error::EditError;
use crate::grid::Grid;
use crate::types::{Cell, Point};

new_key_type! {
    pub struct ItemId;
}

pub const MAX_ITEMS: usize = 16;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub pos: Point,
}

#[derive(Clone, Debug, Default)]
pub struct ItemRegistry {
    items: SlotMap<ItemId, Item>,
}

impl ItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn find(&self, pos: Point) -> Option<ItemId> {
        self.items.iter().find(|(_, item)| item.pos == pos).map(|(id, _)| id)
    }

    /// Places an item at `pos`, returning `None` when one is already there.
    pub fn place(&mut self, grid: &mut Grid, pos: Point) -> Result<Option<ItemId>, EditError> {
        if self.find(pos).is_some() {
            return Ok(None);
        }
        if self.items.len() >= MAX_ITEMS {
            return Err(EditError::ItemLimit(MAX_ITEMS));
        }
        if !grid.set(pos, Cell::Item) {
            return Err(EditError::OutOfBounds(pos));
        }
        Ok(Some(self.items.insert_with_key(|id| Item { id, pos })))
    }

    /// Removes the item at `pos` and turns its cell back into floor.
    pub fn remove_at(&mut self, grid: &mut Grid, pos: Point) -> Option<Item> {
        let id = self.find(pos)?;
        let item = self.items.remove(id)?;
        grid.set(pos, Cell::Floor);
        Some(item)
    }
}
