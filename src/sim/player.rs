//! The player's ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::bullet::{Bullet, BulletKind};
use super::input::{Action, ActionInput};
use super::state::Arena;
use crate::consts::*;

/// The player-controlled ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Half the hitbox, used for arena clamping
    pub half_extents: Vec2,
    /// Time since the last shot (ms), saturating at the shot interval
    pub since_last_shot_ms: f32,
}

impl Player {
    /// Spawn at the fixed start point: centered, near the bottom
    pub fn new(arena: &Arena) -> Self {
        let mut player = Self {
            pos: Vec2::new(arena.width / 2.0, arena.height - PLAYER_SPAWN_OFFSET_Y),
            half_extents: Vec2::new(PLAYER_WIDTH / 2.0, PLAYER_HEIGHT / 2.0),
            // Cooldown starts ready so the first shot is immediate
            since_last_shot_ms: SHOT_INTERVAL_MS,
        };
        player.clamp_to(arena);
        player
    }

    /// Move, clamp, and fire if the cooldown allows
    pub fn update(
        &mut self,
        input: &impl ActionInput,
        elapsed_ms: f32,
        arena: &Arena,
        bullets: &mut Vec<Bullet>,
    ) {
        let speed = if input.is_action_active(Action::Slow) {
            PLAYER_SLOW_SPEED
        } else {
            PLAYER_SPEED
        };

        if input.is_action_active(Action::MoveLeft) {
            self.pos.x -= speed;
        }
        if input.is_action_active(Action::MoveRight) {
            self.pos.x += speed;
        }
        if input.is_action_active(Action::MoveUp) {
            self.pos.y -= speed;
        }
        if input.is_action_active(Action::MoveDown) {
            self.pos.y += speed;
        }
        self.clamp_to(arena);

        self.since_last_shot_ms = (self.since_last_shot_ms + elapsed_ms).min(SHOT_INTERVAL_MS);
        if input.is_action_active(Action::Shoot) && self.since_last_shot_ms >= SHOT_INTERVAL_MS {
            self.shoot(bullets);
            self.since_last_shot_ms = 0.0;
        }
    }

    /// Keep the hitbox fully inside the arena, each axis independently
    pub fn clamp_to(&mut self, arena: &Arena) {
        let min = self.half_extents;
        let max = (Vec2::new(arena.width, arena.height) - self.half_extents).max(min);
        self.pos = self.pos.clamp(min, max);
    }

    /// Fire one shot straight up from just ahead of the ship
    pub fn shoot(&self, bullets: &mut Vec<Bullet>) {
        bullets.push(Bullet::new(
            self.pos - Vec2::new(0.0, SHOT_OFFSET),
            Vec2::new(0.0, -SHOT_SPEED),
            SHOT_RADIUS,
            BulletKind::PlayerShot,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::TickInput;

    fn arena() -> Arena {
        Arena::new(ARENA_WIDTH, ARENA_HEIGHT)
    }

    #[test]
    fn test_spawn_point() {
        let p = Player::new(&arena());
        assert_eq!(p.pos, Vec2::new(300.0, 700.0));
    }

    #[test]
    fn test_slow_speed() {
        let arena = arena();
        let mut bullets = Vec::new();
        let mut p = Player::new(&arena);
        let input = TickInput {
            left: true,
            slow: true,
            ..Default::default()
        };
        p.update(&input, 16.0, &arena, &mut bullets);
        assert_eq!(p.pos.x, 300.0 - PLAYER_SLOW_SPEED);

        let input = TickInput {
            left: true,
            up: true,
            ..Default::default()
        };
        p.update(&input, 16.0, &arena, &mut bullets);
        assert_eq!(p.pos.x, 300.0 - PLAYER_SLOW_SPEED - PLAYER_SPEED);
        assert_eq!(p.pos.y, 700.0 - PLAYER_SPEED);
    }

    #[test]
    fn test_clamped_to_corner() {
        let arena = arena();
        let mut bullets = Vec::new();
        let mut p = Player::new(&arena);
        let input = TickInput {
            right: true,
            down: true,
            ..Default::default()
        };
        for _ in 0..500 {
            p.update(&input, 16.0, &arena, &mut bullets);
        }
        assert_eq!(p.pos, Vec2::new(590.0, 790.0));
    }

    #[test]
    fn test_clamp_in_tiny_arena_does_not_invert() {
        let tiny = Arena::new(12.0, 8.0);
        let mut p = Player::new(&tiny);
        p.clamp_to(&tiny);
        assert_eq!(p.pos, p.half_extents);
    }

    #[test]
    fn test_shot_cooldown() {
        let arena = arena();
        let mut bullets = Vec::new();
        let mut p = Player::new(&arena);
        let input = TickInput {
            shoot: true,
            ..Default::default()
        };

        p.update(&input, 0.0, &arena, &mut bullets);
        assert_eq!(bullets.len(), 1);
        let shot = &bullets[0];
        assert_eq!(shot.kind, BulletKind::PlayerShot);
        assert_eq!(shot.pos, Vec2::new(300.0, 690.0));
        assert_eq!(shot.vel, Vec2::new(0.0, -SHOT_SPEED));

        // 99ms later: still cooling down
        p.update(&input, 60.0, &arena, &mut bullets);
        p.update(&input, 39.0, &arena, &mut bullets);
        assert_eq!(bullets.len(), 1);

        p.update(&input, 1.0, &arena, &mut bullets);
        assert_eq!(bullets.len(), 2);
    }
}
