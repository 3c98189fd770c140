//! Shadow Shooter - a dual-world arcade shooter simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, bullet patterns, collisions, game state)
//! - `settings`: Session configuration loaded from JSON
//! - `autopilot`: Idle/demo bot that plays the game through the normal input path

pub mod autopilot;
pub mod settings;
pub mod sim;

pub use autopilot::Autopilot;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
///
/// Velocities are in distance-per-frame, timers in milliseconds.
pub mod consts {
    /// Largest elapsed time a single tick will accept (ms)
    pub const MAX_ELAPSED_MS: f32 = 100.0;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 600.0;
    pub const ARENA_HEIGHT: f32 = 800.0;

    /// Player hitbox used for arena clamping
    pub const PLAYER_WIDTH: f32 = 20.0;
    pub const PLAYER_HEIGHT: f32 = 20.0;
    /// Player spawns this far above the bottom edge, horizontally centered
    pub const PLAYER_SPAWN_OFFSET_Y: f32 = 100.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_SLOW_SPEED: f32 = 2.0;
    /// Radius of the lethal point at the player's center
    pub const PLAYER_HIT_RADIUS: f32 = 5.0;

    /// Player shots
    pub const SHOT_INTERVAL_MS: f32 = 100.0;
    pub const SHOT_SPEED: f32 = 10.0;
    pub const SHOT_RADIUS: f32 = 4.0;
    /// Shots spawn this far ahead of the player
    pub const SHOT_OFFSET: f32 = 10.0;

    /// Enemies
    pub const ENEMY_RADIUS: f32 = 15.0;
    pub const ENEMY_SPAWN_Y: f32 = -20.0;
    /// Spawn x is kept this far from either side edge
    pub const ENEMY_SPAWN_INSET: f32 = 20.0;
    pub const ENEMY_MIN_SPEED_Y: f32 = 1.0;
    pub const ENEMY_MAX_SPEED_Y: f32 = 3.0;
    pub const ENEMY_MAX_DRIFT_X: f32 = 0.5;
    pub const VOLLEY_MIN_INTERVAL_MS: f32 = 500.0;
    pub const VOLLEY_MAX_INTERVAL_MS: f32 = 1500.0;

    /// Aimed volley: hazard plus its slower collectible twin
    pub const AIMED_HAZARD_SPEED: f32 = 4.0;
    pub const AIMED_HAZARD_RADIUS: f32 = 3.0;
    pub const AIMED_COLLECTIBLE_SPEED: f32 = 3.0;
    pub const AIMED_COLLECTIBLE_RADIUS: f32 = 5.0;

    /// Ring volley
    pub const RING_CHANCE: f32 = 0.3;
    pub const RING_SPOKES: u32 = 8;
    pub const RING_HAZARD_SPEED: f32 = 3.0;
    pub const RING_HAZARD_RADIUS: f32 = 3.0;
    pub const RING_COLLECTIBLE_SPEED: f32 = 2.0;
    pub const RING_COLLECTIBLE_RADIUS: f32 = 4.0;

    /// Bullets further than this outside the arena are dropped
    pub const BULLET_PRUNE_MARGIN: f32 = 50.0;

    /// Spawn scheduler / difficulty ramp
    pub const MAX_ENEMIES: usize = 3;
    pub const SPAWN_INTERVAL_START_MS: f32 = 1000.0;
    pub const SPAWN_INTERVAL_STEP_MS: f32 = 5.0;
    pub const SPAWN_INTERVAL_FLOOR_MS: f32 = 200.0;

    /// Scoring
    pub const KILL_SCORE: u64 = 100;
    pub const COLLECT_SCORE: u64 = 50;
}

/// Unit vector for an angle in radians
#[inline]
pub fn direction(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Bearing from `from` to `to` in radians
#[inline]
pub fn bearing(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_bearing_cardinal() {
        let origin = Vec2::ZERO;
        assert!(bearing(origin, Vec2::new(1.0, 0.0)).abs() < 1e-6);
        assert!((bearing(origin, Vec2::new(0.0, 1.0)) - FRAC_PI_2).abs() < 1e-6);
        assert!((bearing(origin, Vec2::new(-1.0, 0.0)).abs() - PI).abs() < 1e-6);
    }

    #[test]
    fn test_direction_is_unit() {
        for i in 0..16 {
            let v = direction(i as f32 * 0.4);
            assert!((v.length() - 1.0).abs() < 1e-5);
        }
    }
}
