//! State shared by everything that fights

use glam::Vec2;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::{Equipment, Item, Stats};
use crate::Millis;
use crate::ids::{EntityId, ItemId};

/// Cardinal facing
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Facing {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

/// Combatant state: position, stats, belongings and combat timestamps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    /// Top-left corner in pixels
    pub pos: Vec2,
    pub facing: Facing,
    pub stats: Stats,
    pub inventory: Vec<Item>,
    pub equipment: Equipment,
    pub last_attack: Option<Millis>,
    /// When the entity last took damage
    pub hit_at: Option<Millis>,
    pub died_at: Option<Millis>,
}

impl Entity {
    pub fn new(id: EntityId, name: impl Into<String>, pos: Vec2, stats: Stats) -> Self {
        Self {
            id,
            name: name.into(),
            pos,
            facing: Facing::default(),
            stats,
            inventory: Vec::new(),
            equipment: Equipment::default(),
            last_attack: None,
            hit_at: None,
            died_at: None,
        }
    }

    /// Centre of the entity's box
    pub fn center(&self, size: f32) -> Vec2 {
        self.pos + Vec2::splat(size / 2.0)
    }

    pub fn is_dead(&self) -> bool {
        self.died_at.is_some()
    }

    /// Cooldown check against the last attack stamp
    pub fn attack_ready(&self, now: Millis, cooldown: Millis) -> bool {
        self.last_attack
            .is_none_or(|last| now.saturating_sub(last) > cooldown)
    }

    /// Whether the hit tint should still show
    pub fn flashing(&self, now: Millis, window: Millis) -> bool {
        self.hit_at
            .is_some_and(|at| now.saturating_sub(at) < window)
    }

    pub fn find_item(&self, id: ItemId) -> Option<&Item> {
        self.inventory.iter().find(|item| item.id == id)
    }

    /// Remove an item from the inventory by id
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let idx = self.inventory.iter().position(|item| item.id == id)?;
        Some(self.inventory.remove(idx))
    }
}
