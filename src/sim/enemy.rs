//! Enemies: drifting hazards that fire aimed volleys and bullet rings

use std::f32::consts::{FRAC_PI_4, FRAC_PI_8};

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::bullet::{Bullet, BulletKind};
use super::state::Arena;
use crate::consts::*;
use crate::{bearing, direction};

/// An enemy entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Time accumulated toward the next volley (ms)
    pub volley_timer_ms: f32,
    /// Per-enemy volley interval (ms)
    pub volley_interval_ms: f32,
    pub alive: bool,
}

impl Enemy {
    /// Create an enemy at an explicit position (no randomness)
    pub fn new(pos: Vec2, vel: Vec2, volley_interval_ms: f32) -> Self {
        Self {
            pos,
            vel,
            radius: ENEMY_RADIUS,
            volley_timer_ms: 0.0,
            volley_interval_ms,
            alive: true,
        }
    }

    /// Spawn just above the arena with randomized drift and volley timing
    pub fn spawn(rng: &mut impl Rng, arena: &Arena) -> Self {
        let max_x = arena.width - ENEMY_SPAWN_INSET;
        let x = if max_x > ENEMY_SPAWN_INSET {
            rng.random_range(ENEMY_SPAWN_INSET..max_x)
        } else {
            arena.width / 2.0
        };
        let vy = rng.random_range(ENEMY_MIN_SPEED_Y..ENEMY_MAX_SPEED_Y);
        let vx = rng.random_range(-ENEMY_MAX_DRIFT_X..ENEMY_MAX_DRIFT_X);
        let interval = rng.random_range(VOLLEY_MIN_INTERVAL_MS..VOLLEY_MAX_INTERVAL_MS);
        Self::new(Vec2::new(x, ENEMY_SPAWN_Y), Vec2::new(vx, vy), interval)
    }

    /// Move, bounce off the side edges, and fire when the volley timer runs out
    pub fn update(
        &mut self,
        elapsed_ms: f32,
        arena: &Arena,
        target: Vec2,
        rng: &mut impl Rng,
        bullets: &mut Vec<Bullet>,
    ) {
        self.pos += self.vel;

        if self.pos.y > arena.height + self.radius {
            self.alive = false;
        }
        if self.pos.x < 0.0 || self.pos.x > arena.width {
            self.vel.x = -self.vel.x;
        }

        self.volley_timer_ms += elapsed_ms;
        if self.volley_timer_ms > self.volley_interval_ms {
            let ring = rng.random::<f32>() < RING_CHANCE;
            self.shoot(target, ring, bullets);
            self.volley_timer_ms = 0.0;
        }
    }

    /// Emit one volley.
    ///
    /// Always an aimed hazard with a slower collectible twin on the same
    /// bearing. With `ring`, also eight hazard spokes at 45° spacing, each
    /// followed by a collectible filling the gap half a spoke over.
    pub fn shoot(&self, target: Vec2, ring: bool, bullets: &mut Vec<Bullet>) {
        let aim = direction(bearing(self.pos, target));
        bullets.push(Bullet::new(
            self.pos,
            aim * AIMED_HAZARD_SPEED,
            AIMED_HAZARD_RADIUS,
            BulletKind::Hazard,
        ));
        bullets.push(Bullet::new(
            self.pos,
            aim * AIMED_COLLECTIBLE_SPEED,
            AIMED_COLLECTIBLE_RADIUS,
            BulletKind::Collectible,
        ));

        if !ring {
            return;
        }
        log::trace!("ring volley at ({:.0}, {:.0})", self.pos.x, self.pos.y);
        for i in 0..RING_SPOKES {
            let angle = i as f32 * FRAC_PI_4;
            bullets.push(Bullet::new(
                self.pos,
                direction(angle) * RING_HAZARD_SPEED,
                RING_HAZARD_RADIUS,
                BulletKind::Hazard,
            ));
            bullets.push(Bullet::new(
                self.pos,
                direction(angle + FRAC_PI_8) * RING_COLLECTIBLE_SPEED,
                RING_COLLECTIBLE_RADIUS,
                BulletKind::Collectible,
            ));
        }
    }
}
