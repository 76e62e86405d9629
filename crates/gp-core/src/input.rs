//! Per-tick input snapshot

use bitflags::bitflags;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::entity::Facing;

bitflags! {
    /// Keys held down this frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct HeldKeys: u8 {
        const UP = 0x01;
        const DOWN = 0x02;
        const LEFT = 0x04;
        const RIGHT = 0x08;
        const ATTACK = 0x10;
    }
}

/// Mouse in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MouseState {
    pub pos: Vec2,
    /// Button went down this frame
    pub clicked: bool,
}

/// Normalised input for one tick
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub keys: HeldKeys,
    /// Interact key went down this frame
    pub interact: bool,
    pub mouse: MouseState,
}

impl InputSnapshot {
    pub fn holding(keys: HeldKeys) -> Self {
        Self {
            keys,
            ..Self::default()
        }
    }

    /// Unit movement direction, or zero when no movement key is held
    ///
    /// Opposite keys cancel. Diagonals are normalised so they are no faster
    /// than straight moves.
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.keys.contains(HeldKeys::UP) {
            dir.y -= 1.0;
        }
        if self.keys.contains(HeldKeys::DOWN) {
            dir.y += 1.0;
        }
        if self.keys.contains(HeldKeys::LEFT) {
            dir.x -= 1.0;
        }
        if self.keys.contains(HeldKeys::RIGHT) {
            dir.x += 1.0;
        }
        dir.normalize_or_zero()
    }

    /// Facing implied by the held keys; horizontal keys win ties
    pub fn facing(&self) -> Option<Facing> {
        [
            (HeldKeys::RIGHT, Facing::Right),
            (HeldKeys::LEFT, Facing::Left),
            (HeldKeys::DOWN, Facing::Down),
            (HeldKeys::UP, Facing::Up),
        ]
        .into_iter()
        .find(|(key, _)| self.keys.contains(*key))
        .map(|(_, facing)| facing)
    }

    pub fn wants_attack(&self) -> bool {
        self.keys.contains(HeldKeys::ATTACK) || self.mouse.clicked
    }
}
