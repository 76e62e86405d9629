//! Population control

use glam::Vec2;

use crate::config::SimConfig;
use crate::entity::Monster;
use crate::gameloop::GameState;
use crate::ids::EntityId;

/// Sample one spawn point and place a monster there if it is open ground
///
/// Returns the new monster's id, or `None` when the cap is reached or the
/// sampled tile is not the map's base terrain. A miss is not retried until
/// the next call.
pub fn try_spawn(state: &mut GameState, config: &SimConfig) -> Option<EntityId> {
    let live = state.monsters.iter().filter(|m| m.is_alive()).count();
    if live >= config.max_monsters {
        return None;
    }

    let def = state.map_id.definition();
    let angle = state.rng.angle();
    let radius = state
        .rng
        .range_f32(config.spawn_radius_min, config.spawn_radius_max);
    let tile = (state.grid.center_tile() + Vec2::from_angle(angle) * radius).floor();
    let (tx, ty) = (tile.x as i32, tile.y as i32);

    if state.grid.get(tx, ty) != Some(def.base_tile) {
        return None;
    }
    if state
        .objects
        .iter()
        .any(|obj| obj.tile == (tx, ty) && obj.is_solid())
    {
        return None;
    }

    let kind = *state.rng.choose_weighted(def.roster)?;
    let monster = Monster::spawn(
        kind,
        tile * config.tile_size,
        def.difficulty,
        config.monster_speed,
        &mut state.ids,
        &mut state.rng,
    );
    let id = monster.body.id;
    tracing::debug!(%id, kind = %kind, tx, ty, "monster spawned");
    state.monsters.push(monster);
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::ClassType;
    use crate::test_support::arena;
    use crate::world::{MapId, TileType, WorldGrid};

    /// Arena re-floored with Lorens base terrain so spawns can land
    fn grassland() -> GameState {
        let mut state = arena(ClassType::Warrior);
        state.grid = WorldGrid::filled(200, 200, TileType::Grass);
        state
    }

    #[test]
    fn test_spawns_in_band_on_base_tile() {
        let cfg = SimConfig::default();
        let mut state = grassland();
        let center = state.grid.center_tile();
        let mut spawned = 0;
        for _ in 0..50 {
            if try_spawn(&mut state, &cfg).is_some() {
                spawned += 1;
            }
        }
        assert!(spawned > 0);
        for m in &state.monsters {
            let tile = m.body.pos / cfg.tile_size;
            let d = tile.distance(center);
            assert!(d >= cfg.spawn_radius_min - 1.5 && d < cfg.spawn_radius_max + 1.5);
            assert!(MapId::Lorens
                .definition()
                .roster
                .iter()
                .any(|(k, _)| *k == m.kind));
        }
    }

    #[test]
    fn test_cap_is_respected() {
        let cfg = SimConfig {
            max_monsters: 3,
            ..SimConfig::default()
        };
        let mut state = grassland();
        for _ in 0..200 {
            try_spawn(&mut state, &cfg);
        }
        assert_eq!(state.monsters.len(), 3);
    }

    #[test]
    fn test_rejects_non_base_terrain() {
        let cfg = SimConfig::default();
        let mut state = arena(ClassType::Warrior);
        state.grid = WorldGrid::filled(200, 200, TileType::Sand);
        for _ in 0..50 {
            assert!(try_spawn(&mut state, &cfg).is_none());
        }
        assert!(state.monsters.is_empty());
    }

    #[test]
    fn test_out_of_bounds_sample_is_skipped() {
        let cfg = SimConfig::default();
        let mut state = arena(ClassType::Warrior);
        // Band reaches past the edge of a small grid
        state.grid = WorldGrid::filled(60, 60, TileType::Grass);
        for _ in 0..50 {
            assert!(try_spawn(&mut state, &cfg).is_none());
        }
    }
}
