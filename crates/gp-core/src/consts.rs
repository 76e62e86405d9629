//! Core tuning constants
//!
//! Defaults for [`SimConfig`](crate::SimConfig). Times are milliseconds,
//! distances are pixels unless the name says tiles.

/// Map dimensions in tiles
pub const MAP_SIZE: usize = 200;

/// Edge length of one tile in pixels
pub const TILE_SIZE: f32 = 32.0;

/// Viewport used to frame the camera
pub const VIEWPORT_WIDTH: f32 = 1280.0;
pub const VIEWPORT_HEIGHT: f32 = 720.0;

/// Inset applied to an entity box before sampling collision corners
pub const COLLISION_BUFFER: f32 = 10.0;

/// Frame length the per-tick rates are tuned against
pub const FRAME_MS: f32 = 16.0;

/// Radius around the map centre monsters are kept out of (tiles)
pub const CITY_SAFE_RADIUS: f32 = 35.0;

/// Spawn band around the map centre (tiles)
pub const SPAWN_RADIUS_MIN: f32 = 45.0;
pub const SPAWN_RADIUS_MAX: f32 = 90.0;

/// Live monster cap
pub const MAX_MONSTERS: usize = 80;

/// Spawn sampling interval
pub const SPAWN_INTERVAL: u64 = 200;

/// Distance at which a monster starts chasing (tiles); released at twice this
pub const CHASE_RADIUS: f32 = 8.0;

/// Monster melee reach (tiles)
pub const MONSTER_MELEE_RANGE: f32 = 1.3;

/// Attack cooldowns
pub const ATTACK_COOLDOWN_PLAYER: u64 = 400;
pub const ATTACK_COOLDOWN_MONSTER: u64 = 1200;

/// Warrior melee reach
pub const MELEE_REACH: f32 = 64.0;

/// Projectile tuning
pub const PROJECTILE_SPEED: f32 = 10.0;
pub const PROJECTILE_LIFE: f32 = 1200.0;
pub const PROJECTILE_HIT_BOX: f32 = 24.0;
pub const SPELL_MANA_COST: i32 = 5;

/// Interaction radius for objects and NPCs
pub const INTERACT_RANGE: f32 = 64.0;

/// Regeneration
pub const HP_REGEN_INTERVAL: u64 = 5000;
pub const HP_REGEN_AMOUNT: i32 = 2;
pub const MANA_REGEN_INTERVAL: u64 = 3000;
pub const MANA_REGEN_AMOUNT: i32 = 2;
pub const MANA_REGEN_AMOUNT_MAGE: i32 = 5;

/// Monster movement
pub const MONSTER_SPEED: f32 = 1.5;
pub const FLEE_SPEED: f32 = 2.0;
pub const WANDER_RETARGET_INTERVAL: u64 = 3000;
pub const WANDER_SPREAD: f32 = 100.0;

/// Transient visuals
pub const HIT_FLASH: u64 = 200;
pub const FLOATING_TEXT_LIFE: f32 = 1000.0;
pub const FLOATING_TEXT_RISE: f32 = 0.5;
pub const DEATH_LINGER: u64 = 700;
pub const LEVEL_UP_BANNER: u64 = 2000;
pub const SLEEP_DURATION: u64 = 1500;

/// Progression
pub const LEVEL_UP_ATTRIBUTE_POINTS: i32 = 5;
pub const LEVEL_UP_MAX_HP: i32 = 20;

/// Economy
pub const STARTING_GOLD: i32 = 50;
pub const HOUSE_PRICE: i32 = 15000;

/// Message log length
pub const MAX_MESSAGES: usize = 50;

/// Inventory slots shown to the player
pub const INVENTORY_SLOTS: usize = 12;
pub const INVENTORY_SLOTS_BACKPACK: usize = 28;
