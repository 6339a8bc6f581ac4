//! Axis-aligned collision tests
//!
//! The player's hitbox is narrower than the sprite: a fixed inset on each
//! horizontal side keeps near-misses forgiving. Height is the full sprite.

use glam::Vec2;

use super::state::Player;
use crate::consts::HITBOX_INSET;

/// An axis-aligned box, position = top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Strict overlap test - boxes that merely touch edges do not collide
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }
}

/// The player's collision box
pub fn player_hitbox(player: &Player) -> Aabb {
    Aabb::new(
        Vec2::new(player.x + HITBOX_INSET, player.y),
        Vec2::new(player.width - 2.0 * HITBOX_INSET, player.height),
    )
}
