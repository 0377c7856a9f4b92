//! Biome palettes mapping cell states to colours.

use macroquad::color::Color;
use maze_core::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Biome {
    #[default]
    Stone,
    Moss,
    Sand,
    Ember,
}

impl Biome {
    pub const ALL: [Biome; 4] = [Biome::Stone, Biome::Moss, Biome::Sand, Biome::Ember];

    /// Biome bound to number key `slot` (1-based).
    pub fn from_slot(slot: usize) -> Option<Self> {
        slot.checked_sub(1).and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn palette(self) -> Palette {
        match self {
            Biome::Stone => Palette {
                wall: rgb(0.96, 0.96, 0.96),
                floor: rgb(0.0, 0.0, 0.0),
                item: rgb(0.9, 0.16, 0.22),
            },
            Biome::Moss => Palette {
                wall: rgb(0.62, 0.82, 0.55),
                floor: rgb(0.08, 0.16, 0.08),
                item: rgb(0.95, 0.25, 0.2),
            },
            Biome::Sand => Palette {
                wall: rgb(0.93, 0.84, 0.62),
                floor: rgb(0.27, 0.2, 0.12),
                item: rgb(0.85, 0.1, 0.1),
            },
            Biome::Ember => Palette {
                wall: rgb(0.98, 0.7, 0.45),
                floor: rgb(0.18, 0.04, 0.04),
                item: rgb(1.0, 0.2, 0.35),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub wall: Color,
    pub floor: Color,
    pub item: Color,
}

impl Palette {
    pub fn cell_color(&self, cell: Cell) -> Color {
        match cell {
            Cell::Wall => self.wall,
            Cell::Floor => self.floor,
            Cell::Item => self.item,
        }
    }
}

const fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color { r, g, b, a: 1.0 }
}
