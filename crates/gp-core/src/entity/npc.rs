//! Townsfolk: merchants and the guard

use glam::Vec2;
use serde::{Deserialize, Serialize};
use strum::Display;

use super::{Item, ItemKind, StatBonus};
use crate::ids::{IdGenerator, NpcId};

/// What an NPC does when spoken to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum NpcRole {
    WeaponMerchant,
    ArmorMerchant,
    PotionMerchant,
    Guide,
}

/// Non-combat character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    pub id: NpcId,
    pub name: String,
    /// Top-left corner in pixels
    pub pos: Vec2,
    pub role: NpcRole,
    /// Goods for sale; `None` for NPCs that only talk
    pub stock: Option<Vec<Item>>,
}

impl Npc {
    pub fn is_merchant(&self) -> bool {
        self.stock.is_some()
    }

    /// Look up a stock entry by id
    pub fn stock_item(&self, id: crate::ids::ItemId) -> Option<&Item> {
        self.stock.as_ref()?.iter().find(|item| item.id == id)
    }
}

fn ware(ids: &mut IdGenerator, name: &str, kind: ItemKind, price: i32, bonus: StatBonus) -> Item {
    Item::new(ids.item(), name, kind)
        .with_price(price)
        .with_bonus(bonus)
}

/// The fixed town roster, placed relative to the map centre tile
pub fn town_roster(center_tile: Vec2, tile_size: f32, ids: &mut IdGenerator) -> Vec<Npc> {
    let at = |dx: f32, dy: f32| (center_tile + Vec2::new(dx, dy)) * tile_size;

    let weapons = vec![
        ware(ids, "Steel Sword", ItemKind::Weapon, 100, StatBonus::atk(15)),
        ware(
            ids,
            "Golden Gladius",
            ItemKind::Weapon,
            450,
            StatBonus {
                atk: 35,
                speed: 0.2,
                ..StatBonus::default()
            },
        ),
        ware(
            ids,
            "Rune Blade",
            ItemKind::Weapon,
            1200,
            StatBonus {
                atk: 65,
                mana: 20,
                ..StatBonus::default()
            },
        ),
        ware(
            ids,
            "Obsidian Claymore",
            ItemKind::Weapon,
            2500,
            StatBonus {
                atk: 110,
                def: 20,
                ..StatBonus::default()
            },
        ),
        ware(
            ids,
            "Fire Brand",
            ItemKind::Weapon,
            5000,
            StatBonus {
                atk: 180,
                hp: 50,
                ..StatBonus::default()
            },
        ),
        ware(ids, "Battle Axe", ItemKind::Weapon, 250, StatBonus::atk(35)),
    ];
    let armor = vec![
        ware(ids, "Chainmail", ItemKind::Armor, 150, StatBonus::def(10)),
        ware(ids, "Iron Shield", ItemKind::Shield, 120, StatBonus::def(8)),
    ];
    let potions = vec![
        ware(ids, "Small Health Potion", ItemKind::Potion, 20, StatBonus::hp(50)),
        ware(ids, "Small Mana Potion", ItemKind::Potion, 20, StatBonus::mana(30)),
    ];

    vec![
        Npc {
            id: ids.npc(),
            name: "Blacksmith Hans".into(),
            pos: at(-12.0, -12.0),
            role: NpcRole::WeaponMerchant,
            stock: Some(weapons),
        },
        Npc {
            id: ids.npc(),
            name: "Armorer Elena".into(),
            pos: at(12.0, -12.0),
            role: NpcRole::ArmorMerchant,
            stock: Some(armor),
        },
        Npc {
            id: ids.npc(),
            name: "Alchemist Theo".into(),
            pos: at(-12.0, 12.0),
            role: NpcRole::PotionMerchant,
            stock: Some(potions),
        },
        Npc {
            id: ids.npc(),
            name: "Royal Guard".into(),
            pos: at(0.0, -34.0),
            role: NpcRole::Guide,
            stock: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster() {
        let mut ids = IdGenerator::new();
        let npcs = town_roster(Vec2::new(100.0, 100.0), 32.0, &mut ids);
        assert_eq!(npcs.len(), 4);
        assert_eq!(npcs.iter().filter(|n| n.is_merchant()).count(), 3);
        assert_eq!(npcs[0].pos, Vec2::new(88.0 * 32.0, 88.0 * 32.0));
        let guard = &npcs[3];
        assert_eq!(guard.role, NpcRole::Guide);
        assert!(guard.stock.is_none());
    }

    #[test]
    fn test_stock_lookup() {
        let mut ids = IdGenerator::new();
        let npcs = town_roster(Vec2::ZERO, 32.0, &mut ids);
        let theo = &npcs[2];
        let potion = &theo.stock.as_ref().unwrap()[0];
        assert_eq!(theo.stock_item(potion.id).map(|i| i.cost()), Some(20));
        assert!(npcs[3].stock_item(potion.id).is_none());
    }
}
