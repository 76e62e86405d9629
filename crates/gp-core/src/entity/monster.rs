//! Monsters and the monster table

use glam::Vec2;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::{Attributes, Entity, Stats};
use crate::Millis;
use crate::ids::IdGenerator;
use crate::rng::GameRng;

/// Monster species
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum MonsterKind {
    Rat,
    Bat,
    Goblin,
    Wolf,
    Skeleton,
    Orc,
    Demon,
}

/// Unscaled stat row for a species
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonsterTemplate {
    pub hp: i32,
    pub atk: i32,
    pub def: i32,
    pub exp: i32,
    /// Gold drop range, low inclusive, high exclusive
    pub gold: (i32, i32),
}

impl MonsterKind {
    pub const fn template(&self) -> MonsterTemplate {
        let (hp, atk, def, exp, gold) = match self {
            MonsterKind::Rat => (20, 5, 2, 5, (1, 5)),
            MonsterKind::Bat => (30, 8, 1, 8, (2, 8)),
            MonsterKind::Goblin => (45, 12, 4, 12, (5, 15)),
            MonsterKind::Wolf => (70, 18, 6, 18, (0, 2)),
            MonsterKind::Skeleton => (110, 25, 12, 30, (15, 40)),
            MonsterKind::Orc => (180, 35, 20, 60, (30, 80)),
            MonsterKind::Demon => (300, 50, 30, 150, (100, 250)),
        };
        MonsterTemplate {
            hp,
            atk,
            def,
            exp,
            gold,
        }
    }
}

/// AI behavior state
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Behavior {
    #[default]
    Wander,
    Chase,
    Attack,
}

/// Monster instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    pub body: Entity,
    pub kind: MonsterKind,
    pub behavior: Behavior,
    /// Wander leash anchor (pixels)
    pub spawn_point: Vec2,
    pub wander_target: Vec2,
    pub wander_rolled_at: Option<Millis>,
    pub exp_reward: i32,
    pub gold_reward: i32,
}

fn scale(value: i32, difficulty: f32) -> i32 {
    (value as f32 * difficulty).floor() as i32
}

impl Monster {
    /// New monster at `pos` with stats scaled by `difficulty` and a rolled gold drop
    pub fn spawn(
        kind: MonsterKind,
        pos: Vec2,
        difficulty: f32,
        speed: f32,
        ids: &mut IdGenerator,
        rng: &mut GameRng,
    ) -> Self {
        let t = kind.template();
        let hp = scale(t.hp, difficulty).max(1);
        let stats = Stats {
            hp,
            max_hp: hp,
            mana: 0,
            max_mana: 0,
            atk: scale(t.atk, difficulty),
            def: scale(t.def, difficulty),
            speed,
            exp: 0,
            level: 1,
            gold: 0,
            attribute_points: 0,
            attributes: Attributes::new(1, 1, 1, 1, 1),
        };
        let (lo, hi) = t.gold;
        let gold_reward = rng.range_f32(lo as f32, hi as f32).floor() as i32;
        Self {
            body: Entity::new(ids.entity(), kind.to_string(), pos, stats),
            kind,
            behavior: Behavior::Wander,
            spawn_point: pos,
            wander_target: pos,
            wander_rolled_at: None,
            exp_reward: scale(t.exp, difficulty),
            gold_reward,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.body.is_dead()
    }
}
