//! Point-mass projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Arena;

/// How a bullet interacts with the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletKind {
    /// Fired by the player, destroys enemies
    PlayerShot,
    /// Enemy fire, lethal to the player in both worlds
    Hazard,
    /// Bonus pickup, only touchable from the shadow world
    Collectible,
}

/// A bullet entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    /// Distance per frame, never changes after creation
    pub vel: Vec2,
    pub radius: f32,
    pub kind: BulletKind,
    pub alive: bool,
}

impl Bullet {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, kind: BulletKind) -> Self {
        debug_assert!(radius > 0.0);
        Self {
            pos,
            vel,
            radius,
            kind,
            alive: true,
        }
    }

    /// Advance one frame
    pub fn update(&mut self) {
        self.pos += self.vel;
    }

    /// Mark as consumed by a collision
    pub fn consume(&mut self) {
        self.alive = false;
    }

    /// Still inside the arena grown by `margin` on every side (exclusive)
    pub fn within(&self, arena: &Arena, margin: f32) -> bool {
        self.pos.x > -margin
            && self.pos.x < arena.width + margin
            && self.pos.y > -margin
            && self.pos.y < arena.height + margin
    }
}
