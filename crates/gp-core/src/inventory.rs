//! Equip, unequip, consume and buy
//!
//! Every change to worn gear re-derives the player's stats from scratch.

use crate::config::SimConfig;
use crate::entity::EquipSlot;
use crate::error::{ActionResult, Rejection};
use crate::gameloop::GameState;
use crate::ids::ItemId;
use crate::message::MessageKind;

fn reject_logged(state: &mut GameState, rejection: Rejection) -> ActionResult {
    if rejection.is_logged() {
        state.log(rejection.to_string(), MessageKind::System);
    }
    rejection.into()
}

/// Move an inventory item into its equipment slot
///
/// Whatever was in the slot goes back to the inventory. Potions are drunk
/// instead of worn.
pub fn equip_item(state: &mut GameState, config: &SimConfig, id: ItemId) -> ActionResult {
    let Some(item) = state.player.body.find_item(id) else {
        return Rejection::ItemNotCarried.into();
    };
    let (kind, name) = (item.kind, item.name.clone());
    if kind.is_consumable() {
        return use_item(state, id);
    }
    let Some(slot) = state.player.body.equipment.target_slot(kind) else {
        return reject_logged(state, Rejection::NotEquippable(name));
    };

    let body = &mut state.player.body;
    let Some(item) = body.remove_item(id) else {
        return Rejection::ItemNotCarried.into();
    };
    if let Some(previous) = body.equipment.put(slot, item) {
        body.inventory.push(previous);
    }
    state.player.recompute_stats(config.level_up_max_hp);
    tracing::debug!(item = %name, slot = %slot, "equipped");
    state.log(format!("Equipped {name}."), MessageKind::System);
    ActionResult::Success
}

/// Move a worn item back to the inventory; nothing happens for an empty slot
pub fn unequip_item(state: &mut GameState, config: &SimConfig, slot: EquipSlot) -> ActionResult {
    let body = &mut state.player.body;
    let Some(item) = body.equipment.take(slot) else {
        return ActionResult::NoOp;
    };
    let name = item.name.clone();
    body.inventory.push(item);
    state.player.recompute_stats(config.level_up_max_hp);
    tracing::debug!(item = %name, slot = %slot, "unequipped");
    state.log(format!("Unequipped {name}."), MessageKind::System);
    ActionResult::Success
}

/// Drink a potion: apply its hp/mana bonus and destroy it
pub fn use_item(state: &mut GameState, id: ItemId) -> ActionResult {
    if state.player.body.is_dead() {
        return Rejection::PlayerDead.into();
    }
    let Some(item) = state.player.body.find_item(id) else {
        return Rejection::ItemNotCarried.into();
    };
    if !item.kind.is_consumable() {
        return Rejection::NotConsumable(item.name.clone()).into();
    }
    let Some(item) = state.player.body.remove_item(id) else {
        return Rejection::ItemNotCarried.into();
    };

    let bonus = item.bonus();
    let stats = state.player.stats_mut();
    stats.heal(bonus.hp);
    stats.restore_mana(bonus.mana);
    state.log(format!("Used {}.", item.name), MessageKind::System);
    ActionResult::Success
}

/// Buy an item from the open shop's stock
///
/// The player receives a fresh copy with its own id; the stock is unlimited.
pub fn buy_item(state: &mut GameState, id: ItemId) -> ActionResult {
    let Some(shop) = state.active_shop else {
        return Rejection::NoActiveShop.into();
    };
    let ware = state
        .npcs
        .iter()
        .find(|npc| npc.id == shop)
        .and_then(|npc| npc.stock_item(id))
        .cloned();
    let Some(ware) = ware else {
        return Rejection::NotInStock.into();
    };

    let price = ware.cost();
    let gold = state.player.stats().gold;
    if gold < price {
        return reject_logged(state, Rejection::InsufficientGold { price, gold });
    }

    state.player.stats_mut().gold -= price;
    let bought = ware.mint(&mut state.ids);
    tracing::info!(item = %bought.name, price, "item purchased");
    state.log(format!("Purchased {}!", bought.name), MessageKind::Loot);
    state.player.body.inventory.push(bought);
    ActionResult::Success
}
