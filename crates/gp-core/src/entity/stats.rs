//! Stats, attributes and stat bonuses

use core::iter::Sum;
use core::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Allocatable attribute
///
/// Parses case-insensitively from the full name or its three-letter short form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Attribute {
    #[strum(to_string = "Strength", serialize = "str")]
    Strength = 0,
    #[strum(to_string = "Agility", serialize = "agi")]
    Agility = 1,
    #[strum(to_string = "Magic", serialize = "mag")]
    Magic = 2,
    #[strum(to_string = "Stamina", serialize = "sta")]
    Stamina = 3,
    #[strum(to_string = "Health", serialize = "hea")]
    Health = 4,
}

impl Attribute {
    pub const COUNT: usize = 5;

    /// All attributes in order
    pub const ALL: [Attribute; Self::COUNT] = [
        Attribute::Strength,
        Attribute::Agility,
        Attribute::Magic,
        Attribute::Stamina,
        Attribute::Health,
    ];

    pub const fn index(&self) -> usize {
        *self as usize
    }
}

/// The five allocatable attribute values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    values: [i32; Attribute::COUNT],
}

impl Attributes {
    pub const fn new(strength: i32, agility: i32, magic: i32, stamina: i32, health: i32) -> Self {
        Self {
            values: [strength, agility, magic, stamina, health],
        }
    }

    pub fn get(&self, attr: Attribute) -> i32 {
        self.values[attr.index()]
    }

    pub fn set(&mut self, attr: Attribute, value: i32) {
        self.values[attr.index()] = value;
    }

    pub fn increment(&mut self, attr: Attribute) {
        self.values[attr.index()] += 1;
    }

    /// Per-attribute difference `self - base`
    pub fn gained_over(&self, base: &Attributes) -> Attributes {
        let mut out = *self;
        for attr in Attribute::ALL {
            out.set(attr, self.get(attr) - base.get(attr));
        }
        out
    }
}

/// Stat deltas carried by an item
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatBonus {
    pub atk: i32,
    pub def: i32,
    pub hp: i32,
    pub mana: i32,
    pub speed: f32,
}

impl StatBonus {
    pub fn atk(atk: i32) -> Self {
        Self {
            atk,
            ..Self::default()
        }
    }

    pub fn def(def: i32) -> Self {
        Self {
            def,
            ..Self::default()
        }
    }

    pub fn hp(hp: i32) -> Self {
        Self {
            hp,
            ..Self::default()
        }
    }

    pub fn mana(mana: i32) -> Self {
        Self {
            mana,
            ..Self::default()
        }
    }
}

impl Add for StatBonus {
    type Output = StatBonus;

    fn add(self, rhs: StatBonus) -> StatBonus {
        StatBonus {
            atk: self.atk + rhs.atk,
            def: self.def + rhs.def,
            hp: self.hp + rhs.hp,
            mana: self.mana + rhs.mana,
            speed: self.speed + rhs.speed,
        }
    }
}

impl AddAssign for StatBonus {
    fn add_assign(&mut self, rhs: StatBonus) {
        *self = *self + rhs;
    }
}

impl Sum for StatBonus {
    fn sum<I: Iterator<Item = StatBonus>>(iter: I) -> StatBonus {
        iter.fold(StatBonus::default(), Add::add)
    }
}

/// Combat and progression stats shared by players and monsters
///
/// `hp` stays within `0..=max_hp` and `mana` within `0..=max_mana`; every
/// mutator here clamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: i32,
    pub max_hp: i32,
    pub mana: i32,
    pub max_mana: i32,
    pub atk: i32,
    pub def: i32,
    pub speed: f32,
    pub exp: i32,
    pub level: i32,
    pub gold: i32,
    pub attribute_points: i32,
    pub attributes: Attributes,
}

impl Stats {
    /// Subtract hp, stopping at zero; returns the hp actually removed
    pub fn lose_hp(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp - amount.max(0)).max(0);
        before - self.hp
    }

    /// Add hp up to the maximum
    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount.max(0)).min(self.max_hp);
    }

    /// Add mana up to the maximum
    pub fn restore_mana(&mut self, amount: i32) {
        self.mana = (self.mana + amount.max(0)).min(self.max_mana);
    }

    /// Spend mana if enough is available
    pub fn spend_mana(&mut self, amount: i32) -> bool {
        if self.mana >= amount {
            self.mana -= amount;
            true
        } else {
            false
        }
    }

    /// Pull hp and mana back inside their bounds
    pub fn clamp(&mut self) {
        self.max_hp = self.max_hp.max(1);
        self.max_mana = self.max_mana.max(0);
        self.hp = self.hp.clamp(0, self.max_hp);
        self.mana = self.mana.clamp(0, self.max_mana);
        self.attribute_points = self.attribute_points.max(0);
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}
