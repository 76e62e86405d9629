//! Monster AI
//!
//! Each live monster runs a small state machine every tick:
//!
//! - inside the city's safe radius it is pushed straight out from the map
//!   centre and forced back to [`Behavior::Wander`], whatever else is going on
//! - within the chase radius of the player it starts chasing; it only gives
//!   up once the player is more than twice that far away
//! - while chasing it walks at the player and, in melee range, strikes on its
//!   own cooldown ([`Behavior::Attack`])
//! - otherwise it drifts at half speed toward a point near its spawn, re-rolled
//!   every few seconds
//!
//! Corpses are swept out once their linger window has passed.

mod spawn;

pub use spawn::try_spawn;

use glam::Vec2;

use crate::combat::{self, Target};
use crate::config::SimConfig;
use crate::entity::{Behavior, Monster};
use crate::gameloop::{GameState, TickReport};
use crate::world::slide;

/// Drop monsters whose death animation has finished
pub fn remove_lingered(state: &mut GameState, config: &SimConfig) {
    let now = state.clock;
    let before = state.monsters.len();
    state.monsters.retain(|m| {
        m.body
            .died_at
            .is_none_or(|at| now.saturating_sub(at) < config.death_linger)
    });
    let removed = before - state.monsters.len();
    if removed > 0 {
        tracing::debug!(removed, "corpses removed");
    }
}

/// Advance every monster by one tick
pub fn update_monsters(
    state: &mut GameState,
    config: &SimConfig,
    dt: f32,
    report: &mut TickReport,
) {
    remove_lingered(state, config);

    let ratio = SimConfig::frame_ratio(dt);
    let center = state.grid.center_px(config.tile_size);
    let safe_radius = config.tiles(config.city_safe_radius);
    let chase_radius = config.tiles(config.chase_radius);
    let melee_range = config.tiles(config.monster_melee_range);

    for idx in 0..state.monsters.len() {
        if !state.monsters[idx].is_alive() {
            continue;
        }
        let player_pos = state.player.body.pos;
        let monster = &mut state.monsters[idx];
        let pos = monster.body.pos;

        if pos.distance(center) < safe_radius {
            let away = (pos - center).try_normalize().unwrap_or(Vec2::X);
            monster.body.pos += away * config.flee_speed * ratio;
            set_behavior(monster, Behavior::Wander);
            continue;
        }

        let to_player = pos.distance(player_pos);
        if to_player < chase_radius {
            if monster.behavior == Behavior::Wander {
                set_behavior(monster, Behavior::Chase);
            }
        } else if to_player > chase_radius * 2.0 {
            set_behavior(monster, Behavior::Wander);
        }

        if monster.behavior == Behavior::Wander {
            wander(state, idx, config, ratio);
            continue;
        }

        let step = (player_pos - pos).normalize_or_zero() * monster.body.stats.speed * ratio;
        monster.body.pos = slide(pos, step, &state.grid, &state.objects, config);

        if to_player < melee_range {
            set_behavior(monster, Behavior::Attack);
            let player_alive = !state.player.body.is_dead();
            if player_alive
                && monster
                    .body
                    .attack_ready(state.clock, config.attack_cooldown_monster)
            {
                monster.body.last_attack = Some(state.clock);
                let atk = monster.body.stats.atk;
                combat::apply_damage(state, Target::Player, atk, config, report);
            }
        } else {
            set_behavior(monster, Behavior::Chase);
        }
    }
}

fn set_behavior(monster: &mut Monster, behavior: Behavior) {
    if monster.behavior != behavior {
        tracing::debug!(
            id = %monster.body.id,
            from = %monster.behavior,
            to = %behavior,
            "behavior change"
        );
        monster.behavior = behavior;
    }
}

fn wander(state: &mut GameState, idx: usize, config: &SimConfig, ratio: f32) {
    let now = state.clock;
    let monster = &mut state.monsters[idx];

    let due = monster
        .wander_rolled_at
        .is_none_or(|at| now.saturating_sub(at) >= config.wander_retarget_interval);
    if due {
        let half = config.wander_spread / 2.0;
        let offset = Vec2::new(
            state.rng.range_f32(-half, half),
            state.rng.range_f32(-half, half),
        );
        monster.wander_target = monster.spawn_point + offset;
        monster.wander_rolled_at = Some(now);
    }

    let pos = monster.body.pos;
    let to_target = monster.wander_target - pos;
    let max_step = monster.body.stats.speed * 0.5 * ratio;
    let step = to_target.clamp_length_max(max_step);
    if step != Vec2::ZERO {
        monster.body.pos = slide(pos, step, &state.grid, &state.objects, config);
    }
}
