//! Tile types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr};

/// Terrain code stored in the world grid
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    FromRepr,
)]
#[repr(u8)]
pub enum TileType {
    #[default]
    Grass = 0,
    Dirt = 1,
    Stone = 2,
    Water = 3,
    Sand = 4,
    Forest = 5,
    Wall = 6,
    Lava = 7,
    FloorDark = 8,
    FloorWood = 9,
    Roof = 10,
    FloorBrick = 11,
    DoorClosed = 12,
    DoorOpen = 13,
    Bed = 14,
    Chest = 15,
}

impl TileType {
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// Terrain that stops movement on its own
    pub const fn is_blocking(&self) -> bool {
        matches!(
            self,
            TileType::Water
                | TileType::Wall
                | TileType::Forest
                | TileType::DoorClosed
                | TileType::Bed
                | TileType::Chest
        )
    }
}
