//! The player character

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{ClassType, DerivedStats, Entity, Item, ItemKind, Stats};
use crate::Millis;
use crate::config::SimConfig;
use crate::ids::{EntityId, IdGenerator};

/// Player character: a combatant plus class and rest state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub body: Entity,
    pub class: ClassType,
    /// When the player last used a bed
    pub slept_at: Option<Millis>,
}

impl Player {
    /// Fresh level-1 character with the class's base stats and starter pack
    pub fn new(
        name: impl Into<String>,
        class: ClassType,
        pos: Vec2,
        config: &SimConfig,
        ids: &mut IdGenerator,
    ) -> Self {
        let t = class.template();
        let stats = Stats {
            hp: t.hp,
            max_hp: t.hp,
            mana: t.mana,
            max_mana: t.mana,
            atk: t.atk,
            def: t.def,
            speed: t.speed,
            exp: 0,
            level: 1,
            gold: config.starting_gold,
            attribute_points: 0,
            attributes: t.attributes,
        };
        let mut body = Entity::new(EntityId::PLAYER, name, pos, stats);
        body.inventory.push(
            Item::new(ids.item(), "Apprentice Pack", ItemKind::Backpack)
                .with_description("Equip to carry more."),
        );
        Self {
            body,
            class,
            slept_at: None,
        }
    }

    pub fn stats(&self) -> &Stats {
        &self.body.stats
    }

    pub fn stats_mut(&mut self) -> &mut Stats {
        &mut self.body.stats
    }

    /// Derive atk/def/speed/max hp/max mana from class, level, attributes and
    /// equipped gear
    pub fn derived(&self, level_hp: i32) -> DerivedStats {
        let stats = &self.body.stats;
        self.class.template().derive(
            stats.level,
            level_hp,
            &stats.attributes,
            self.body.equipment.total_bonus(),
        )
    }

    /// Overwrite derived stats with a fresh derivation and clamp hp/mana
    pub fn recompute_stats(&mut self, level_hp: i32) {
        let d = self.derived(level_hp);
        let stats = &mut self.body.stats;
        stats.atk = d.atk;
        stats.def = d.def;
        stats.speed = d.speed;
        stats.max_hp = d.max_hp;
        stats.max_mana = d.max_mana;
        stats.clamp();
    }

    /// Inventory slots the UI shows
    pub fn inventory_capacity(&self, config: &SimConfig) -> usize {
        if self.body.equipment.has_backpack() {
            config.inventory_slots_backpack
        } else {
            config.inventory_slots
        }
    }

    pub fn is_sleeping(&self, now: Millis, duration: Millis) -> bool {
        self.slept_at
            .is_some_and(|at| now.saturating_sub(at) < duration)
    }
}
