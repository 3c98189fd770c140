//! Collision resolution
//!
//! Everything is circle-vs-circle. The interesting part is the dual-world
//! rule set for the player: which bullet kinds kill, which are collected,
//! and which pass straight through depends on whether the shadow world is
//! active.

use glam::Vec2;

use super::bullet::{Bullet, BulletKind};
use super::enemy::Enemy;
use crate::consts::PLAYER_HIT_RADIUS;

/// Strict overlap test between two circles
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance(b) < ra + rb
}

/// Resolve player shots against enemies.
///
/// Enemies are walked in order, and for each enemy the bullets in order. A
/// shot is consumed on its first hit. An enemy already marked destroyed this
/// frame can still absorb (and score) further shots that reach it.
///
/// Returns the number of hits.
pub fn resolve_shots(enemies: &mut [Enemy], bullets: &mut [Bullet]) -> u32 {
    let mut hits = 0;
    for enemy in enemies.iter_mut() {
        for bullet in bullets.iter_mut() {
            if bullet.kind != BulletKind::PlayerShot || !bullet.alive {
                continue;
            }
            if circles_overlap(bullet.pos, bullet.radius, enemy.pos, enemy.radius) {
                enemy.alive = false;
                bullet.consume();
                hits += 1;
            }
        }
    }
    hits
}

/// Outcome of the player-vs-world check for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerContact {
    /// Player was struck by something lethal
    pub lethal: bool,
    /// Collectibles consumed before the check stopped
    pub collected: u32,
}

/// Check the player against enemy bodies and live bullets.
///
/// Enemy bodies are lethal in either world. Hazards are lethal in either
/// world. Collectibles are consumed in the shadow world and ignored
/// otherwise. The walk stops at the first lethal contact.
pub fn check_player(
    player_pos: Vec2,
    shadow_active: bool,
    enemies: &[Enemy],
    bullets: &mut [Bullet],
) -> PlayerContact {
    let mut contact = PlayerContact::default();

    if enemies
        .iter()
        .any(|e| circles_overlap(e.pos, e.radius, player_pos, PLAYER_HIT_RADIUS))
    {
        contact.lethal = true;
        return contact;
    }

    for bullet in bullets.iter_mut() {
        if !bullet.alive {
            continue;
        }
        if !circles_overlap(bullet.pos, bullet.radius, player_pos, PLAYER_HIT_RADIUS) {
            continue;
        }
        match (bullet.kind, shadow_active) {
            (BulletKind::Hazard, _) => {
                contact.lethal = true;
                return contact;
            }
            (BulletKind::Collectible, true) => {
                bullet.consume();
                contact.collected += 1;
            }
            (BulletKind::Collectible, false) | (BulletKind::PlayerShot, _) => {}
        }
    }

    contact
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bullet(x: f32, y: f32, kind: BulletKind) -> Bullet {
        Bullet::new(Vec2::new(x, y), Vec2::ZERO, 3.0, kind)
    }

    fn enemy(x: f32, y: f32) -> Enemy {
        Enemy::new(Vec2::new(x, y), Vec2::ZERO, 1000.0)
    }

    #[test]
    fn test_overlap_is_strict() {
        assert!(circles_overlap(Vec2::ZERO, 5.0, Vec2::new(7.9, 0.0), 3.0));
        assert!(!circles_overlap(Vec2::ZERO, 5.0, Vec2::new(8.0, 0.0), 3.0));
    }

    #[test]
    fn test_shot_kills_enemy_once() {
        let mut enemies = vec![enemy(100.0, 100.0)];
        let mut bullets = vec![
            bullet(100.0, 110.0, BulletKind::PlayerShot),
            bullet(100.0, 100.0, BulletKind::Hazard),
        ];
        assert_eq!(resolve_shots(&mut enemies, &mut bullets), 1);
        assert!(!enemies[0].alive);
        assert!(!bullets[0].alive);
        assert!(bullets[1].alive, "hazards never hit enemies");
    }

    #[test]
    fn test_each_shot_reaching_enemy_scores() {
        let mut enemies = vec![enemy(100.0, 100.0)];
        let mut bullets = vec![
            bullet(100.0, 105.0, BulletKind::PlayerShot),
            bullet(100.0, 95.0, BulletKind::PlayerShot),
        ];
        assert_eq!(resolve_shots(&mut enemies, &mut bullets), 2);
    }

    #[test]
    fn test_shot_consumed_by_first_enemy() {
        let mut enemies = vec![enemy(100.0, 100.0), enemy(104.0, 100.0)];
        let mut bullets = vec![bullet(102.0, 100.0, BulletKind::PlayerShot)];
        assert_eq!(resolve_shots(&mut enemies, &mut bullets), 1);
        assert!(!enemies[0].alive);
        assert!(enemies[1].alive);
    }

    #[test]
    fn test_enemy_body_lethal_in_both_worlds() {
        let enemies = vec![enemy(110.0, 100.0)];
        for shadow in [false, true] {
            let contact = check_player(Vec2::new(100.0, 100.0), shadow, &enemies, &mut []);
            assert!(contact.lethal);
        }
    }

    #[test]
    fn test_hazard_lethal_in_both_worlds() {
        for shadow in [false, true] {
            let mut bullets = vec![bullet(102.0, 100.0, BulletKind::Hazard)];
            let contact = check_player(Vec2::new(100.0, 100.0), shadow, &[], &mut bullets);
            assert!(contact.lethal);
        }
    }

    #[test]
    fn test_collectible_ignored_in_normal_world() {
        let mut bullets = vec![bullet(100.0, 100.0, BulletKind::Collectible)];
        let contact = check_player(Vec2::new(100.0, 100.0), false, &[], &mut bullets);
        assert_eq!(contact, PlayerContact::default());
        assert!(bullets[0].alive);
    }

    #[test]
    fn test_collectible_consumed_in_shadow_world() {
        let mut bullets = vec![
            bullet(100.0, 100.0, BulletKind::Collectible),
            bullet(101.0, 100.0, BulletKind::Collectible),
            bullet(200.0, 100.0, BulletKind::Collectible),
        ];
        let contact = check_player(Vec2::new(100.0, 100.0), true, &[], &mut bullets);
        assert!(!contact.lethal);
        assert_eq!(contact.collected, 2);
        assert!(!bullets[0].alive && !bullets[1].alive);
        assert!(bullets[2].alive);
    }

    #[test]
    fn test_walk_stops_at_first_lethal_bullet() {
        let mut bullets = vec![
            bullet(100.0, 100.0, BulletKind::Collectible),
            bullet(100.0, 100.0, BulletKind::Hazard),
            bullet(100.0, 100.0, BulletKind::Collectible),
        ];
        let contact = check_player(Vec2::new(100.0, 100.0), true, &[], &mut bullets);
        assert!(contact.lethal);
        assert_eq!(contact.collected, 1);
        assert!(bullets[2].alive);
    }

    #[test]
    fn test_own_shots_are_harmless() {
        let mut bullets = vec![bullet(100.0, 100.0, BulletKind::PlayerShot)];
        let contact = check_player(Vec2::new(100.0, 100.0), false, &[], &mut bullets);
        assert!(!contact.lethal);
    }
}
