//! Interactive map objects and houses

use glam::Vec2;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::ids::{EntityId, HouseId, ObjectId};

/// Interactive object category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum ObjectKind {
    Door,
    Chest,
    Bed,
    Fountain,
    Stall,
}

/// Object placed on a tile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractiveObject {
    pub id: ObjectId,
    /// Tile coordinate
    pub tile: (i32, i32),
    pub kind: ObjectKind,
    /// Only meaningful for doors
    pub open: bool,
    /// House this door belongs to
    pub house: Option<HouseId>,
}

impl InteractiveObject {
    pub fn new(id: ObjectId, tile: (i32, i32), kind: ObjectKind, house: Option<HouseId>) -> Self {
        Self {
            id,
            tile,
            kind,
            open: false,
            house,
        }
    }

    /// Whether the object stops movement on its tile
    pub const fn is_solid(&self) -> bool {
        match self.kind {
            ObjectKind::Door => !self.open,
            ObjectKind::Bed | ObjectKind::Chest | ObjectKind::Stall => true,
            ObjectKind::Fountain => false,
        }
    }

    /// Whether the interact key does anything with this object
    pub const fn is_usable(&self) -> bool {
        matches!(
            self.kind,
            ObjectKind::Door | ObjectKind::Bed | ObjectKind::Fountain
        )
    }

    /// Top-left pixel corner of the object's tile
    pub fn pixel_pos(&self, tile_size: f32) -> Vec2 {
        Vec2::new(self.tile.0 as f32, self.tile.1 as f32) * tile_size
    }
}

/// Purchasable house
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub id: HouseId,
    pub owner: Option<EntityId>,
    pub price: i32,
    /// Tile coordinate of the front door
    pub door: (i32, i32),
}

impl House {
    pub fn new(id: HouseId, price: i32, door: (i32, i32)) -> Self {
        Self {
            id,
            owner: None,
            price,
            door,
        }
    }

    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }
}
