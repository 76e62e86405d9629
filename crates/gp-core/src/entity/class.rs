//! Character classes and their base stat rows

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::{Attributes, StatBonus};

/// Playable class
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
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum ClassType {
    #[default]
    Warrior,
    Mage,
    Elf,
}

/// How a class turns the attack input into damage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackStyle {
    /// Hit every monster within reach
    Melee,
    /// Mana-costed magic bolt
    Spell,
    /// Free arrow
    Arrow,
}

/// Base stats a class starts with before attributes and gear
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassTemplate {
    pub hp: i32,
    pub mana: i32,
    pub atk: i32,
    pub def: i32,
    pub speed: f32,
    pub attributes: Attributes,
}

const WARRIOR: ClassTemplate = ClassTemplate {
    hp: 160,
    mana: 30,
    atk: 22,
    def: 12,
    speed: 3.5,
    attributes: Attributes::new(10, 5, 2, 8, 10),
};

const MAGE: ClassTemplate = ClassTemplate {
    hp: 100,
    mana: 150,
    atk: 18,
    def: 6,
    speed: 3.5,
    attributes: Attributes::new(2, 5, 12, 4, 6),
};

const ELF: ClassTemplate = ClassTemplate {
    hp: 120,
    mana: 80,
    atk: 20,
    def: 8,
    speed: 3.8,
    attributes: Attributes::new(6, 10, 6, 6, 8),
};

impl ClassType {
    pub fn template(&self) -> &'static ClassTemplate {
        match self {
            ClassType::Warrior => &WARRIOR,
            ClassType::Mage => &MAGE,
            ClassType::Elf => &ELF,
        }
    }

    pub const fn attack_style(&self) -> AttackStyle {
        match self {
            ClassType::Warrior => AttackStyle::Melee,
            ClassType::Mage => AttackStyle::Spell,
            ClassType::Elf => AttackStyle::Arrow,
        }
    }
}

/// Fully derived combat stats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedStats {
    pub atk: i32,
    pub def: i32,
    pub speed: f32,
    pub max_hp: i32,
    pub max_mana: i32,
}

/// Per-point effect of each attribute above the class baseline
pub const STRENGTH_ATK: i32 = 2;
pub const AGILITY_DEF: i32 = 1;
pub const AGILITY_SPEED: f32 = 0.05;
pub const MAGIC_MANA: i32 = 10;
pub const STAMINA_HP: i32 = 10;
pub const HEALTH_HP: i32 = 20;

impl ClassTemplate {
    /// Derive combat stats from scratch
    ///
    /// Depends only on the inputs, so calling it after every change can never
    /// count a bonus twice.
    pub fn derive(
        &self,
        level: i32,
        level_hp: i32,
        attributes: &Attributes,
        gear: StatBonus,
    ) -> DerivedStats {
        use super::Attribute::*;

        let gained = attributes.gained_over(&self.attributes);
        DerivedStats {
            atk: self.atk + STRENGTH_ATK * gained.get(Strength) + gear.atk,
            def: self.def + AGILITY_DEF * gained.get(Agility) + gear.def,
            speed: self.speed + AGILITY_SPEED * gained.get(Agility) as f32 + gear.speed,
            max_hp: self.hp
                + level_hp * (level - 1).max(0)
                + HEALTH_HP * gained.get(Health)
                + STAMINA_HP * gained.get(Stamina)
                + gear.hp,
            max_mana: self.mana + MAGIC_MANA * gained.get(Magic) + gear.mana,
        }
    }
}
