//! Scripted input for headless runs

use clap::ValueEnum;
use glam::Vec2;
use gp_core::{GameState, HeldKeys, InputSnapshot, MouseState, SimConfig};

/// How the scripted player behaves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Pattern {
    /// Stand still and do nothing
    Idle,
    /// Walk a square around the start point
    #[default]
    Roam,
    /// Walk to the nearest monster and fire at it
    Hunt,
}

/// Ticks spent on each leg of the roam square
const ROAM_LEG: u64 = 40;

/// Distance at which the hunter stops closing in and just attacks
const HUNT_RANGE: f32 = 24.0;

impl Pattern {
    pub fn input(self, tick: u64, state: &GameState, config: &SimConfig) -> InputSnapshot {
        match self {
            Pattern::Idle => InputSnapshot::default(),
            Pattern::Roam => {
                let keys = match (tick / ROAM_LEG) % 4 {
                    0 => HeldKeys::RIGHT,
                    1 => HeldKeys::DOWN,
                    2 => HeldKeys::LEFT,
                    _ => HeldKeys::UP,
                };
                InputSnapshot::holding(keys)
            }
            Pattern::Hunt => hunt(state, config),
        }
    }
}

fn hunt(state: &GameState, config: &SimConfig) -> InputSnapshot {
    let size = config.tile_size;
    let me = state.player.body.center(size);
    let Some(target) = state
        .monsters
        .iter()
        .filter(|m| m.is_alive())
        .map(|m| m.body.center(size))
        .min_by(|a, b| a.distance_squared(me).total_cmp(&b.distance_squared(me)))
    else {
        return InputSnapshot::default();
    };

    let offset = target - me;
    let mut keys = HeldKeys::empty();
    if offset.length() > HUNT_RANGE {
        keys |= steer(offset);
    }
    InputSnapshot {
        keys,
        interact: false,
        mouse: MouseState {
            pos: target - state.camera,
            clicked: true,
        },
    }
}

/// Movement keys pointing roughly along `offset`
fn steer(offset: Vec2) -> HeldKeys {
    let mut keys = HeldKeys::empty();
    let dead = 2.0;
    if offset.x > dead {
        keys |= HeldKeys::RIGHT;
    } else if offset.x < -dead {
        keys |= HeldKeys::LEFT;
    }
    if offset.y > dead {
        keys |= HeldKeys::DOWN;
    } else if offset.y < -dead {
        keys |= HeldKeys::UP;
    }
    keys
}
