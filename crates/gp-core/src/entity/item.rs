//! Items

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::StatBonus;
use crate::ids::{IdGenerator, ItemId};

/// Item category; decides which equipment slot an item goes to
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
pub enum ItemKind {
    Weapon,
    Armor,
    Helmet,
    Shield,
    Gloves,
    Pants,
    Boots,
    Ring,
    Wings,
    Backpack,
    Potion,
    #[default]
    Misc,
}

impl ItemKind {
    /// Parse a category name; anything unknown is `Misc`
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    pub const fn is_consumable(&self) -> bool {
        matches!(self, ItemKind::Potion)
    }
}

/// Item instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    pub price: Option<i32>,
    pub description: Option<String>,
    pub bonus: Option<StatBonus>,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            price: None,
            description: None,
            bonus: None,
        }
    }

    pub fn with_price(mut self, price: i32) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_bonus(mut self, bonus: StatBonus) -> Self {
        self.bonus = Some(bonus);
        self
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Price in gold; unpriced items are free
    pub fn cost(&self) -> i32 {
        self.price.unwrap_or(0).max(0)
    }

    pub fn bonus(&self) -> StatBonus {
        self.bonus.unwrap_or_default()
    }

    /// Copy of this item under a new identity
    pub fn mint(&self, ids: &mut IdGenerator) -> Item {
        Item {
            id: ids.item(),
            ..self.clone()
        }
    }
}
