//! Tick orchestration
//!
//! [`update`] advances a [`GameState`] by one frame in a fixed order: player
//! movement, interaction and attack first, then projectiles, then monsters,
//! then regeneration and spawning. Later stages see what earlier ones did, so
//! a monster killed by the player's swing can't hit back in the same tick.
//!
//! [`Simulation`] bundles a state with its tuning and map source and exposes
//! the intents a UI may issue between ticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Millis;
use crate::ai;
use crate::combat::{self, FloatingText};
use crate::config::SimConfig;
use crate::entity::{
    Attribute, ClassType, EquipSlot, Equipment, Item, Monster, MonsterKind, Npc, Player, Stats,
    town_roster,
};
use crate::error::ActionResult;
use crate::ids::{IdGenerator, ItemId, MessageId, NpcId};
use crate::input::InputSnapshot;
use crate::interact;
use crate::inventory;
use crate::message::{ChatMessage, MessageKind, MessageLog};
use crate::progression;
use crate::projectile::{self, Projectile};
use crate::rng::GameRng;
use crate::world::{
    House, InteractiveObject, MapId, MapSource, StandardMaps, WorldGrid, slide,
};

/// What happened during one tick, for audio and effects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub damage_dealt: i32,
    pub damage_taken: i32,
    pub kills: Vec<MonsterKind>,
    pub level_ups: u32,
    pub projectiles_fired: u32,
    pub spawned: u32,
    pub player_died: bool,
    /// A shop session held the world still
    pub frozen: bool,
}

/// The whole simulated world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub monsters: Vec<Monster>,
    pub npcs: Vec<Npc>,
    pub objects: Vec<InteractiveObject>,
    pub houses: Vec<House>,
    pub projectiles: Vec<Projectile>,
    pub floating_texts: Vec<FloatingText>,
    pub messages: MessageLog,

    /// Top-left of the view in world pixels
    pub camera: Vec2,
    pub map_id: MapId,
    pub grid: WorldGrid,

    /// When the last level-up banner was raised
    pub level_up_at: Option<Millis>,
    /// Merchant whose shop is open; freezes the world while set
    pub active_shop: Option<NpcId>,

    /// Timestamp of the current tick
    pub clock: Millis,
    pub last_spawn: Millis,
    pub last_hp_regen: Millis,
    pub last_mana_regen: Millis,

    pub ids: IdGenerator,
    pub rng: GameRng,
}

/// Where the player appears on a map: three tiles south-east of the centre
pub fn start_position(grid: &WorldGrid, config: &SimConfig) -> Vec2 {
    (grid.center_tile() + Vec2::splat(3.0)) * config.tile_size
}

impl GameState {
    /// Create a new character on `map`
    pub fn new<M: MapSource + ?Sized>(
        name: &str,
        class: ClassType,
        map: MapId,
        maps: &mut M,
        config: &SimConfig,
        mut rng: GameRng,
        now: Millis,
    ) -> Self {
        let mut ids = IdGenerator::new();
        let layout = maps.generate(map, &mut ids, &mut rng);
        let start = start_position(&layout.grid, config);
        let player = Player::new(name, class, start, config, &mut ids);
        let npcs = town_roster(layout.grid.center_tile(), config.tile_size, &mut ids);

        let mut state = Self {
            player,
            monsters: Vec::new(),
            npcs,
            objects: layout.objects,
            houses: layout.houses,
            projectiles: Vec::new(),
            floating_texts: Vec::new(),
            messages: MessageLog::new(config.max_messages),
            camera: Vec2::ZERO,
            map_id: map,
            grid: layout.grid,
            level_up_at: None,
            active_shop: None,
            clock: now,
            last_spawn: now,
            last_hp_regen: now,
            last_mana_regen: now,
            ids,
            rng,
        };
        state.frame_camera(config);
        tracing::info!(name, class = %class, map = %map, seed = state.rng.seed(), "new game");
        state.log(format!("Welcome to Groopa, {name}!"), MessageKind::System);
        state
    }

    /// Append a line to the message log, stamped with the current tick
    pub fn log(&mut self, text: impl Into<String>, kind: MessageKind) -> MessageId {
        let id = self.ids.message();
        self.messages.push(ChatMessage {
            id,
            text: text.into(),
            kind,
            at: self.clock,
        });
        id
    }

    /// Centre the view on the player
    pub fn frame_camera(&mut self, config: &SimConfig) {
        let half = Vec2::new(config.viewport_width, config.viewport_height) / 2.0;
        self.camera = self.player.body.pos - half;
    }

    pub fn active_shop_npc(&self) -> Option<&Npc> {
        let id = self.active_shop?;
        self.npcs.iter().find(|npc| npc.id == id)
    }

    pub fn level_up_visible(&self, config: &SimConfig) -> bool {
        self.level_up_at
            .is_some_and(|at| self.clock.saturating_sub(at) < config.level_up_banner)
    }

    /// Read-only copy of what the HUD and menus display
    pub fn hud(&self, config: &SimConfig) -> HudSnapshot {
        let body = &self.player.body;
        HudSnapshot {
            name: body.name.clone(),
            class: self.player.class,
            stats: body.stats.clone(),
            exp_to_next: progression::exp_to_next(body.stats.level),
            tile: WorldGrid::tile_of(body.pos, config.tile_size),
            map: self.map_id,
            map_name: self.map_id.definition().name.to_string(),
            inventory: body.inventory.clone(),
            inventory_capacity: self.player.inventory_capacity(config),
            equipment: body.equipment.clone(),
            messages: self.messages.iter().cloned().collect(),
            shop: self.active_shop_npc().map(|npc| ShopView {
                npc: npc.id,
                name: npc.name.clone(),
                stock: npc.stock.clone().unwrap_or_default(),
            }),
            level_up_banner: self.level_up_visible(config),
            sleeping: self.player.is_sleeping(self.clock, config.sleep_duration),
            hit_flash: body.flashing(self.clock, config.hit_flash),
            dead: body.is_dead(),
        }
    }
}

/// Open shop as the trade window shows it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopView {
    pub npc: NpcId,
    pub name: String,
    pub stock: Vec<Item>,
}

/// Player-facing snapshot for UI collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub name: String,
    pub class: ClassType,
    pub stats: Stats,
    pub exp_to_next: i32,
    pub tile: (i32, i32),
    pub map: MapId,
    pub map_name: String,
    pub inventory: Vec<Item>,
    pub inventory_capacity: usize,
    pub equipment: Equipment,
    pub messages: Vec<ChatMessage>,
    pub shop: Option<ShopView>,
    pub level_up_banner: bool,
    pub sleeping: bool,
    pub hit_flash: bool,
    pub dead: bool,
}

fn move_player(state: &mut GameState, config: &SimConfig, input: &InputSnapshot, dt: f32) {
    let body = &mut state.player.body;
    if let Some(facing) = input.facing() {
        body.facing = facing;
    }
    let dir = input.direction();
    if dir == Vec2::ZERO {
        return;
    }
    let delta = dir * body.stats.speed * SimConfig::frame_ratio(dt);
    body.pos = slide(body.pos, delta, &state.grid, &state.objects, config);
}

fn regenerate(state: &mut GameState, config: &SimConfig) {
    let now = state.clock;
    let alive = !state.player.body.is_dead();
    let mage = state.player.class == ClassType::Mage;

    if now.saturating_sub(state.last_mana_regen) >= config.mana_regen_interval {
        state.last_mana_regen = now;
        if alive {
            let amount = if mage {
                config.mana_regen_amount_mage
            } else {
                config.mana_regen_amount
            };
            state.player.stats_mut().restore_mana(amount);
        }
    }
    if now.saturating_sub(state.last_hp_regen) >= config.hp_regen_interval {
        state.last_hp_regen = now;
        if alive {
            state.player.stats_mut().heal(config.hp_regen_amount);
        }
    }
}

/// Advance the world by `dt` milliseconds ending at timestamp `now`
///
/// While a shop is open nothing moves; the report comes back with `frozen`
/// set.
pub fn update(
    state: &mut GameState,
    config: &SimConfig,
    dt: f32,
    input: &InputSnapshot,
    now: Millis,
) -> TickReport {
    let mut report = TickReport::default();
    state.clock = now;
    if state.active_shop.is_some() {
        report.frozen = true;
        return report;
    }

    let dt = dt.max(0.0);
    let alive = !state.player.body.is_dead();
    if alive {
        move_player(state, config, input, dt);
    }
    state.frame_camera(config);

    if alive && input.interact {
        interact::interact(state, config);
        if state.active_shop.is_some() {
            report.frozen = true;
            return report;
        }
    }
    if alive && input.wants_attack() {
        let aim = input.mouse.pos + state.camera;
        combat::player_attack(state, config, aim, &mut report);
    }

    projectile::advance_projectiles(state, config, dt, &mut report);
    ai::update_monsters(state, config, dt, &mut report);
    combat::advance_floating_texts(&mut state.floating_texts, config, dt);
    regenerate(state, config);

    if now.saturating_sub(state.last_spawn) >= config.spawn_interval {
        state.last_spawn = now;
        if ai::try_spawn(state, config).is_some() {
            report.spawned += 1;
        }
    }
    report
}

/// Post a line to the message log
pub fn add_chat_message(
    state: &mut GameState,
    text: impl Into<String>,
    kind: MessageKind,
) -> MessageId {
    state.log(text, kind)
}

/// Log a chat line from the player; blank lines are dropped
pub fn say(state: &mut GameState, text: &str) -> ActionResult {
    let text = text.trim();
    if text.is_empty() {
        return ActionResult::NoOp;
    }
    let line = format!("{}: {}", state.player.body.name, text);
    state.log(line, MessageKind::Chat);
    ActionResult::Success
}

/// End the shop session so the world ticks again
pub fn close_shop(state: &mut GameState) -> ActionResult {
    match state.active_shop.take() {
        Some(npc) => {
            tracing::info!(%npc, "shop closed");
            ActionResult::Success
        }
        None => ActionResult::NoOp,
    }
}

/// Load another map and put the player at its start tile
///
/// Monsters and projectiles from the old map are discarded; the player keeps
/// stats, inventory and gear.
pub fn switch_map<M: MapSource + ?Sized>(
    state: &mut GameState,
    config: &SimConfig,
    maps: &mut M,
    map: MapId,
) {
    let layout = maps.generate(map, &mut state.ids, &mut state.rng);
    state.grid = layout.grid;
    state.objects = layout.objects;
    state.houses = layout.houses;
    state.map_id = map;
    state.monsters.clear();
    state.projectiles.clear();
    state.active_shop = None;
    state.player.body.pos = start_position(&state.grid, config);
    state.frame_camera(config);
    tracing::info!(map = %map, "map switched");
    let name = map.definition().name;
    state.log(format!("Entered {name}."), MessageKind::System);
}

/// A game in progress: state plus its tuning and map source
pub struct Simulation<M: MapSource = StandardMaps> {
    state: GameState,
    config: SimConfig,
    maps: M,
}

impl Simulation<StandardMaps> {
    /// New character on the stock Lorens map
    pub fn new(name: &str, class: ClassType, config: SimConfig, seed: u64) -> Self {
        Self::with_maps(name, class, config, seed, StandardMaps, MapId::Lorens)
    }
}

impl<M: MapSource> Simulation<M> {
    pub fn with_maps(
        name: &str,
        class: ClassType,
        config: SimConfig,
        seed: u64,
        mut maps: M,
        map: MapId,
    ) -> Self {
        let state = GameState::new(name, class, map, &mut maps, &config, GameRng::new(seed), 0);
        Self {
            state,
            config,
            maps,
        }
    }

    /// Resume from an existing state
    pub fn from_state(state: GameState, config: SimConfig, maps: M) -> Self {
        Self {
            state,
            config,
            maps,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    pub fn hud(&self) -> HudSnapshot {
        self.state.hud(&self.config)
    }

    pub fn tick(&mut self, dt: f32, input: &InputSnapshot, now: Millis) -> TickReport {
        update(&mut self.state, &self.config, dt, input, now)
    }

    pub fn allocate_attribute(&mut self, attr: Attribute) -> ActionResult {
        progression::allocate_attribute(&mut self.state, &self.config, attr)
    }

    pub fn equip_item(&mut self, id: ItemId) -> ActionResult {
        inventory::equip_item(&mut self.state, &self.config, id)
    }

    pub fn unequip_item(&mut self, slot: EquipSlot) -> ActionResult {
        inventory::unequip_item(&mut self.state, &self.config, slot)
    }

    pub fn use_item(&mut self, id: ItemId) -> ActionResult {
        inventory::use_item(&mut self.state, id)
    }

    pub fn buy_item(&mut self, id: ItemId) -> ActionResult {
        inventory::buy_item(&mut self.state, id)
    }

    pub fn close_shop(&mut self) -> ActionResult {
        close_shop(&mut self.state)
    }

    pub fn add_chat_message(&mut self, text: impl Into<String>, kind: MessageKind) -> MessageId {
        add_chat_message(&mut self.state, text, kind)
    }

    pub fn say(&mut self, text: &str) -> ActionResult {
        say(&mut self.state, text)
    }

    pub fn switch_map(&mut self, map: MapId) {
        switch_map(&mut self.state, &self.config, &mut self.maps, map);
    }
}
