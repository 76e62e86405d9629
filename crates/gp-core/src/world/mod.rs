//! World: tiles, collision, map objects and map definitions

mod generation;
mod grid;
mod maps;
mod objects;
mod tile;

pub use generation::{MapLayout, MapSource, StandardMaps, StaticMap};
pub use grid::{WorldGrid, is_blocked, slide};
pub use maps::{MapDefinition, MapId};
pub use objects::{House, InteractiveObject, ObjectKind};
pub use tile::TileType;
