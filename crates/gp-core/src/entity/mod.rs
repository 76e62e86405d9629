//! Entity model: players, monsters, NPCs and what they carry

mod body;
mod class;
mod equipment;
mod item;
mod monster;
mod npc;
mod player;
mod stats;

pub use body::{Entity, Facing};
pub use class::{AttackStyle, ClassTemplate, ClassType, DerivedStats};
pub use class::{AGILITY_DEF, AGILITY_SPEED, HEALTH_HP, MAGIC_MANA, STAMINA_HP, STRENGTH_ATK};
pub use equipment::{EquipSlot, Equipment};
pub use item::{Item, ItemKind};
pub use monster::{Behavior, Monster, MonsterKind, MonsterTemplate};
pub use npc::{Npc, NpcRole, town_roster};
pub use player::Player;
pub use stats::{Attribute, Attributes, StatBonus, Stats};
