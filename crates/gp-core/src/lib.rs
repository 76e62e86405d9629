//! gp-core: simulation core for the Groopa action RPG
//!
//! Owns the authoritative world state and advances it one frame at a time
//! from an input snapshot and a timestamp. Rendering, UI, audio and input
//! capture live outside this crate and only read the state or call the
//! intent entry points on [`Simulation`].
//!
//! There is no I/O here. Randomness comes from a seeded [`GameRng`] and ids
//! from an [`IdGenerator`], both carried in the [`GameState`], so a seed plus
//! an input script replays exactly.

pub mod ai;
pub mod combat;
pub mod entity;
pub mod input;
pub mod interact;
pub mod inventory;
pub mod message;
pub mod progression;
pub mod projectile;
pub mod world;

mod config;
mod consts;
mod error;
mod gameloop;
mod ids;
mod rng;
#[cfg(test)]
mod test_support;

/// Wall-clock milliseconds
pub type Millis = u64;

pub use config::SimConfig;
pub use consts::*;
pub use error::{ActionResult, Rejection};
pub use gameloop::{
    GameState, HudSnapshot, ShopView, Simulation, TickReport, add_chat_message, close_shop, say,
    start_position, switch_map, update,
};
pub use ids::{
    EntityId, HouseId, IdGenerator, ItemId, MessageId, NpcId, ObjectId, ProjectileId, TextId,
};
pub use input::{HeldKeys, InputSnapshot, MouseState};
pub use message::{ChatMessage, MessageKind, MessageLog};
pub use rng::GameRng;
