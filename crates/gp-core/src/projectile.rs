//! Traveling attacks

use glam::Vec2;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::combat::{self, Target};
use crate::config::SimConfig;
use crate::gameloop::{GameState, TickReport};
use crate::ids::{EntityId, ProjectileId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum ProjectileKind {
    Magic,
    Arrow,
}

impl ProjectileKind {
    pub const fn color(&self) -> &'static str {
        match self {
            ProjectileKind::Magic => "#4cc9f0",
            ProjectileKind::Arrow => "#fb8500",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: ProjectileId,
    pub kind: ProjectileKind,
    pub pos: Vec2,
    /// Pixels per 16ms frame
    pub vel: Vec2,
    pub damage: i32,
    pub owner: EntityId,
    /// Remaining flight time in ms
    pub life: f32,
}

impl Projectile {
    /// Projectile at `origin` heading for `target`
    ///
    /// A target on top of the origin fires along +x.
    #[allow(clippy::too_many_arguments)]
    pub fn aimed(
        id: ProjectileId,
        kind: ProjectileKind,
        origin: Vec2,
        target: Vec2,
        speed: f32,
        damage: i32,
        owner: EntityId,
        life: f32,
    ) -> Self {
        let dir = (target - origin).try_normalize().unwrap_or(Vec2::X);
        Self {
            id,
            kind,
            pos: origin,
            vel: dir * speed,
            damage,
            owner,
            life,
        }
    }

    /// Whether `point` is inside this projectile's hit box
    fn hits(&self, point: Vec2, half_extent: f32) -> bool {
        let d = (point - self.pos).abs();
        d.x < half_extent && d.y < half_extent
    }
}

/// Move every projectile, resolve hits and drop the spent ones
///
/// A projectile stops at the first live monster whose centre is within the
/// hit box; it never passes through.
pub fn advance_projectiles(
    state: &mut GameState,
    config: &SimConfig,
    dt: f32,
    report: &mut TickReport,
) {
    let ratio = SimConfig::frame_ratio(dt);
    let flying = std::mem::take(&mut state.projectiles);
    let mut kept = Vec::with_capacity(flying.len());

    for mut p in flying {
        p.pos += p.vel * ratio;
        p.life -= dt;

        if p.owner == EntityId::PLAYER {
            let victim = state.monsters.iter().position(|m| {
                m.is_alive() && p.hits(m.body.center(config.tile_size), config.projectile_hit_box)
            });
            if let Some(idx) = victim {
                combat::apply_damage(state, Target::Monster(idx), p.damage, config, report);
                continue;
            }
        }

        if p.life > 0.0 {
            kept.push(p);
        } else {
            tracing::debug!(id = %p.id, "projectile expired");
        }
    }
    state.projectiles = kept;
}
