//! Fixtures shared by unit tests

use glam::Vec2;

use crate::config::SimConfig;
use crate::consts::MAP_SIZE;
use crate::entity::{ClassType, Monster, MonsterKind};
use crate::gameloop::GameState;
use crate::rng::GameRng;
use crate::world::{MapId, MapLayout, StaticMap, TileType, WorldGrid};

/// Open dirt field with the player on tile (150, 150)
///
/// Dirt is not Lorens base terrain, so nothing spawns on its own.
pub fn arena(class: ClassType) -> GameState {
    let cfg = SimConfig::default();
    let grid = WorldGrid::filled(MAP_SIZE, MAP_SIZE, TileType::Dirt);
    let mut maps = StaticMap(MapLayout::bare(grid));
    let mut state = GameState::new(
        "Tester",
        class,
        MapId::Lorens,
        &mut maps,
        &cfg,
        GameRng::new(7),
        0,
    );
    state.player.body.pos = Vec2::splat(150.0 * cfg.tile_size);
    state.frame_camera(&cfg);
    state
}

/// Add an unscaled monster and return its index
pub fn place_monster(state: &mut GameState, kind: MonsterKind, pos: Vec2) -> usize {
    let cfg = SimConfig::default();
    let monster = Monster::spawn(
        kind,
        pos,
        1.0,
        cfg.monster_speed,
        &mut state.ids,
        &mut state.rng,
    );
    state.monsters.push(monster);
    state.monsters.len() - 1
}
