//! Equipment slots

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::{Item, ItemKind, StatBonus};

/// Named equipment slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[repr(u8)]
pub enum EquipSlot {
    Helmet = 0,
    Armor = 1,
    Gloves = 2,
    Pants = 3,
    Boots = 4,
    Weapon = 5,
    Shield = 6,
    Ring1 = 7,
    Ring2 = 8,
    Wings = 9,
    Backpack = 10,
}

impl EquipSlot {
    pub const COUNT: usize = 11;

    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Fixed slot for an item kind; rings and unequippable kinds return `None`
    pub const fn for_kind(kind: ItemKind) -> Option<EquipSlot> {
        match kind {
            ItemKind::Weapon => Some(EquipSlot::Weapon),
            ItemKind::Armor => Some(EquipSlot::Armor),
            ItemKind::Helmet => Some(EquipSlot::Helmet),
            ItemKind::Shield => Some(EquipSlot::Shield),
            ItemKind::Gloves => Some(EquipSlot::Gloves),
            ItemKind::Pants => Some(EquipSlot::Pants),
            ItemKind::Boots => Some(EquipSlot::Boots),
            ItemKind::Wings => Some(EquipSlot::Wings),
            ItemKind::Backpack => Some(EquipSlot::Backpack),
            ItemKind::Ring | ItemKind::Potion | ItemKind::Misc => None,
        }
    }
}

/// One optional item per slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    slots: [Option<Item>; EquipSlot::COUNT],
    /// Ring slot replaced next when both are full
    ring_swap_second: bool,
}

impl Equipment {
    pub fn get(&self, slot: EquipSlot) -> Option<&Item> {
        self.slots[slot.index()].as_ref()
    }

    /// Put an item in a slot, returning whatever was there
    pub fn put(&mut self, slot: EquipSlot, item: Item) -> Option<Item> {
        self.slots[slot.index()].replace(item)
    }

    pub fn take(&mut self, slot: EquipSlot) -> Option<Item> {
        self.slots[slot.index()].take()
    }

    /// Resolve the slot an item kind should go to right now
    ///
    /// Rings fill an empty ring slot first; with both full they replace the
    /// ring slots alternately.
    pub fn target_slot(&mut self, kind: ItemKind) -> Option<EquipSlot> {
        if kind != ItemKind::Ring {
            return EquipSlot::for_kind(kind);
        }
        if self.get(EquipSlot::Ring1).is_none() {
            return Some(EquipSlot::Ring1);
        }
        if self.get(EquipSlot::Ring2).is_none() {
            return Some(EquipSlot::Ring2);
        }
        let slot = if self.ring_swap_second {
            EquipSlot::Ring2
        } else {
            EquipSlot::Ring1
        };
        self.ring_swap_second = !self.ring_swap_second;
        Some(slot)
    }

    /// Iterate over occupied slots
    pub fn iter(&self) -> impl Iterator<Item = (EquipSlot, &Item)> {
        use strum::IntoEnumIterator;
        EquipSlot::iter().filter_map(|slot| self.get(slot).map(|item| (slot, item)))
    }

    /// Sum of every equipped item's bonus
    pub fn total_bonus(&self) -> StatBonus {
        self.iter().map(|(_, item)| item.bonus()).sum()
    }

    pub fn has_backpack(&self) -> bool {
        self.get(EquipSlot::Backpack).is_some()
    }

    pub fn contains(&self, id: crate::ids::ItemId) -> bool {
        self.iter().any(|(_, item)| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ItemId;

    fn ring(id: u32) -> Item {
        Item::new(ItemId(id), format!("Ring {id}"), ItemKind::Ring)
    }

    #[test]
    fn test_rings_fill_empty_slot_first() {
        let mut eq = Equipment::default();
        assert_eq!(eq.target_slot(ItemKind::Ring), Some(EquipSlot::Ring1));
        eq.put(EquipSlot::Ring1, ring(1));
        assert_eq!(eq.target_slot(ItemKind::Ring), Some(EquipSlot::Ring2));
        eq.put(EquipSlot::Ring2, ring(2));
        assert_eq!(eq.target_slot(ItemKind::Ring), Some(EquipSlot::Ring1));
        assert_eq!(eq.target_slot(ItemKind::Ring), Some(EquipSlot::Ring2));
        // Ring1 emptied again: fill it before alternating
        eq.take(EquipSlot::Ring1);
        assert_eq!(eq.target_slot(ItemKind::Ring), Some(EquipSlot::Ring1));
    }

    #[test]
    fn test_unequippable_kinds() {
        let mut eq = Equipment::default();
        assert_eq!(eq.target_slot(ItemKind::Potion), None);
        assert_eq!(eq.target_slot(ItemKind::Misc), None);
        assert_eq!(eq.target_slot(ItemKind::Wings), Some(EquipSlot::Wings));
    }

    #[test]
    fn test_total_bonus() {
        let mut eq = Equipment::default();
        eq.put(
            EquipSlot::Weapon,
            Item::new(ItemId(1), "Sword", ItemKind::Weapon).with_bonus(StatBonus::atk(15)),
        );
        eq.put(
            EquipSlot::Shield,
            Item::new(ItemId(2), "Shield", ItemKind::Shield).with_bonus(StatBonus::def(8)),
        );
        let total = eq.total_bonus();
        assert_eq!(total.atk, 15);
        assert_eq!(total.def, 8);
        assert!(eq.contains(ItemId(2)));
        assert!(!eq.has_backpack());
    }
}
