//! Interact key handling
//!
//! Objects are checked before NPCs, each in declaration order, and the first
//! one within reach takes the input. Chests and stalls never do.

use crate::config::SimConfig;
use crate::entity::Player;
use crate::error::{ActionResult, Rejection};
use crate::gameloop::GameState;
use crate::ids::EntityId;
use crate::message::MessageKind;
use crate::world::{ObjectKind, is_blocked};

/// Resolve one interact press
pub fn interact(state: &mut GameState, config: &SimConfig) -> ActionResult {
    if state.player.body.is_dead() {
        return ActionResult::NoOp;
    }
    let pos = state.player.body.pos;
    let range = config.interact_range;

    let object = state
        .objects
        .iter()
        .position(|obj| obj.is_usable() && obj.pixel_pos(config.tile_size).distance(pos) < range);
    if let Some(idx) = object {
        return use_object(state, idx, config);
    }

    let npc = state.npcs.iter().position(|npc| npc.pos.distance(pos) < range);
    if let Some(idx) = npc {
        return talk_to(state, idx);
    }
    ActionResult::NoOp
}

fn use_object(state: &mut GameState, idx: usize, config: &SimConfig) -> ActionResult {
    let (kind, house) = (state.objects[idx].kind, state.objects[idx].house);
    match kind {
        ObjectKind::Door => {
            let house = house
                .and_then(|id| state.houses.iter().position(|h| h.id == id));
            match house {
                Some(h) if !state.houses[h].is_owned() => buy_house(state, idx, h),
                _ if state.objects[idx].open && closing_traps_player(state, idx, config) => {
                    ActionResult::NoOp
                }
                _ => {
                    let door = &mut state.objects[idx];
                    door.open = !door.open;
                    ActionResult::Success
                }
            }
        }
        ObjectKind::Bed => {
            rest(&mut state.player, state.clock);
            state.log("You feel well rested.", MessageKind::System);
            ActionResult::Success
        }
        ObjectKind::Fountain => {
            state.log("The fountain water sparkles.", MessageKind::System);
            ActionResult::Success
        }
        ObjectKind::Chest | ObjectKind::Stall => ActionResult::NoOp,
    }
}

/// Whether the player's box would overlap the door once it is shut
fn closing_traps_player(state: &GameState, door: usize, config: &SimConfig) -> bool {
    let mut closed = state.objects[door].clone();
    closed.open = false;
    is_blocked(state.player.body.pos, &state.grid, &[closed], config)
}

fn rest(player: &mut Player, now: crate::Millis) {
    let stats = player.stats_mut();
    stats.hp = stats.max_hp;
    player.slept_at = Some(now);
}

fn buy_house(state: &mut GameState, door: usize, house: usize) -> ActionResult {
    let price = state.houses[house].price;
    let gold = state.player.stats().gold;
    if gold < price {
        let rejection = Rejection::InsufficientGold { price, gold };
        state.log(rejection.to_string(), MessageKind::System);
        return rejection.into();
    }

    state.player.stats_mut().gold -= price;
    state.houses[house].owner = Some(EntityId::PLAYER);
    state.objects[door].open = true;
    tracing::info!(house = %state.houses[house].id, price, "house purchased");
    state.log(format!("Purchased a house for {price} Gold!"), MessageKind::Loot);
    ActionResult::Success
}

fn talk_to(state: &mut GameState, idx: usize) -> ActionResult {
    let npc = &state.npcs[idx];
    if npc.is_merchant() {
        let (id, name) = (npc.id, npc.name.clone());
        state.active_shop = Some(id);
        tracing::info!(npc = %name, "shop opened");
        state.log(format!("Trading with {name}..."), MessageKind::System);
    } else {
        let line = format!("{}: \"Greetings, traveler!\"", npc.name);
        state.log(line, MessageKind::Chat);
    }
    ActionResult::Success
}
