//! Map definitions
//!
//! Each map names its terrain palette, the monsters that populate it and how
//! hard they hit.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::TileType;
use crate::entity::MonsterKind;

/// Map identifier
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
pub enum MapId {
    #[default]
    Lorens,
    Caverns,
}

/// Static per-map configuration
#[derive(Debug, Clone, PartialEq)]
pub struct MapDefinition {
    pub id: MapId,
    pub name: &'static str,
    /// Open terrain; the only tile monsters may spawn on
    pub base_tile: TileType,
    pub secondary_tile: TileType,
    pub obstacle_tile: TileType,
    pub liquid_tile: TileType,
    /// Monster kinds with spawn weights
    pub roster: &'static [(MonsterKind, u32)],
    /// Multiplier applied to monster hp/atk/def/exp
    pub difficulty: f32,
}

const LORENS: MapDefinition = MapDefinition {
    id: MapId::Lorens,
    name: "Lorens Kingdom",
    base_tile: TileType::Grass,
    secondary_tile: TileType::Stone,
    obstacle_tile: TileType::Forest,
    liquid_tile: TileType::Water,
    roster: &[
        (MonsterKind::Rat, 1),
        (MonsterKind::Goblin, 1),
        (MonsterKind::Wolf, 1),
    ],
    difficulty: 1.0,
};

const CAVERNS: MapDefinition = MapDefinition {
    id: MapId::Caverns,
    name: "Obsidian Caverns",
    base_tile: TileType::FloorDark,
    secondary_tile: TileType::Stone,
    obstacle_tile: TileType::Wall,
    liquid_tile: TileType::Lava,
    roster: &[
        (MonsterKind::Skeleton, 1),
        (MonsterKind::Orc, 1),
        (MonsterKind::Demon, 1),
        (MonsterKind::Bat, 1),
    ],
    difficulty: 2.5,
};

impl MapId {
    pub fn definition(&self) -> &'static MapDefinition {
        match self {
            MapId::Lorens => &LORENS,
            MapId::Caverns => &CAVERNS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_map_has_a_roster() {
        for id in MapId::iter() {
            let def = id.definition();
            assert_eq!(def.id, id);
            assert!(!def.roster.is_empty());
            assert!(def.difficulty >= 1.0);
        }
    }

    #[test]
    fn test_caverns_is_harder() {
        assert!(MapId::Caverns.definition().difficulty > MapId::Lorens.definition().difficulty);
    }
}
