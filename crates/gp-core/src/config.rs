//! Simulation tuning
//!
//! Every number the tick loop compares against lives here so a driver can
//! override it from a file without touching the core. Map content (grid size,
//! house plots and prices) is part of the map generators and stays fixed.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable simulation parameters
///
/// Missing fields fall back to the defaults in [`crate::consts`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // Geometry
    pub tile_size: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub collision_buffer: f32,

    // AI radii (tiles)
    pub chase_radius: f32,
    pub city_safe_radius: f32,
    pub spawn_radius_min: f32,
    pub spawn_radius_max: f32,
    pub monster_melee_range: f32,

    // Population
    pub max_monsters: usize,
    pub spawn_interval: u64,

    // Combat (ms / px)
    pub attack_cooldown_player: u64,
    pub attack_cooldown_monster: u64,
    pub melee_reach: f32,
    pub projectile_speed: f32,
    pub projectile_life: f32,
    pub projectile_hit_box: f32,
    pub spell_mana_cost: i32,

    // Movement rates, px per 16ms frame
    pub monster_speed: f32,
    pub flee_speed: f32,
    pub wander_retarget_interval: u64,
    pub wander_spread: f32,

    // Interaction
    pub interact_range: f32,

    // Regeneration
    pub hp_regen_interval: u64,
    pub hp_regen_amount: i32,
    pub mana_regen_interval: u64,
    pub mana_regen_amount: i32,
    pub mana_regen_amount_mage: i32,

    // Transients (ms)
    pub hit_flash: u64,
    pub floating_text_life: f32,
    pub floating_text_rise: f32,
    pub death_linger: u64,
    pub level_up_banner: u64,
    pub sleep_duration: u64,

    // Progression
    pub level_up_attribute_points: i32,
    pub level_up_max_hp: i32,

    // Economy and inventory
    pub starting_gold: i32,
    pub inventory_slots: usize,
    pub inventory_slots_backpack: usize,

    // Log
    pub max_messages: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            collision_buffer: COLLISION_BUFFER,
            chase_radius: CHASE_RADIUS,
            city_safe_radius: CITY_SAFE_RADIUS,
            spawn_radius_min: SPAWN_RADIUS_MIN,
            spawn_radius_max: SPAWN_RADIUS_MAX,
            monster_melee_range: MONSTER_MELEE_RANGE,
            max_monsters: MAX_MONSTERS,
            spawn_interval: SPAWN_INTERVAL,
            attack_cooldown_player: ATTACK_COOLDOWN_PLAYER,
            attack_cooldown_monster: ATTACK_COOLDOWN_MONSTER,
            melee_reach: MELEE_REACH,
            projectile_speed: PROJECTILE_SPEED,
            projectile_life: PROJECTILE_LIFE,
            projectile_hit_box: PROJECTILE_HIT_BOX,
            spell_mana_cost: SPELL_MANA_COST,
            monster_speed: MONSTER_SPEED,
            flee_speed: FLEE_SPEED,
            wander_retarget_interval: WANDER_RETARGET_INTERVAL,
            wander_spread: WANDER_SPREAD,
            interact_range: INTERACT_RANGE,
            hp_regen_interval: HP_REGEN_INTERVAL,
            hp_regen_amount: HP_REGEN_AMOUNT,
            mana_regen_interval: MANA_REGEN_INTERVAL,
            mana_regen_amount: MANA_REGEN_AMOUNT,
            mana_regen_amount_mage: MANA_REGEN_AMOUNT_MAGE,
            hit_flash: HIT_FLASH,
            floating_text_life: FLOATING_TEXT_LIFE,
            floating_text_rise: FLOATING_TEXT_RISE,
            death_linger: DEATH_LINGER,
            level_up_banner: LEVEL_UP_BANNER,
            sleep_duration: SLEEP_DURATION,
            level_up_attribute_points: LEVEL_UP_ATTRIBUTE_POINTS,
            level_up_max_hp: LEVEL_UP_MAX_HP,
            starting_gold: STARTING_GOLD,
            inventory_slots: INVENTORY_SLOTS,
            inventory_slots_backpack: INVENTORY_SLOTS_BACKPACK,
            max_messages: MAX_MESSAGES,
        }
    }
}

impl SimConfig {
    /// Elapsed-time ratio applied to per-frame rates
    pub fn frame_ratio(dt_ms: f32) -> f32 {
        dt_ms / FRAME_MS
    }

    /// Convert a tile distance to pixels
    pub fn tiles(&self, tiles: f32) -> f32 {
        tiles * self.tile_size
    }
}
