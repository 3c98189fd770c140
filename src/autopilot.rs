//! Idle/demo mode: a simple bot that plays through the normal input path

use glam::Vec2;

use crate::sim::{BulletKind, GameState, TickInput};

/// Hazards closer than this make the bot dodge
const DANGER_RADIUS: f32 = 60.0;
/// Hazards closer than this make the bot slow down for finer dodging
const CLOSE_CALL_RADIUS: f32 = 25.0;
/// Collectibles closer than this make the bot flip into the shadow world
const PICKUP_RADIUS: f32 = 30.0;
/// Horizontal slack before the bot bothers lining up with an enemy
const AIM_SLACK: f32 = 4.0;

/// Stateless bot
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl Autopilot {
    pub fn new() -> Self {
        Self
    }

    /// Pick the input for the next tick
    pub fn next_input(&self, state: &GameState) -> TickInput {
        if state.is_game_over() {
            return TickInput {
                restart: true,
                ..Default::default()
            };
        }

        let me = state.player.pos;
        let mut input = TickInput {
            shoot: true,
            ..Default::default()
        };

        let nearest = |kind: BulletKind| {
            state
                .bullets
                .iter()
                .filter(|b| b.alive && b.kind == kind)
                .map(|b| (b.pos, b.pos.distance(me)))
                .min_by(|a, b| a.1.total_cmp(&b.1))
        };

        match nearest(BulletKind::Hazard) {
            Some((threat, dist)) if dist < DANGER_RADIUS => {
                let away = me - threat;
                steer(&mut input, away);
                input.slow = dist < CLOSE_CALL_RADIUS;
            }
            _ => {
                // Line up under the closest enemy
                if let Some(enemy) = state
                    .enemies
                    .iter()
                    .min_by(|a, b| a.pos.distance(me).total_cmp(&b.pos.distance(me)))
                {
                    let dx = enemy.pos.x - me.x;
                    input.left = dx < -AIM_SLACK;
                    input.right = dx > AIM_SLACK;
                }
                input.shadow = matches!(
                    nearest(BulletKind::Collectible),
                    Some((_, dist)) if dist < PICKUP_RADIUS
                );
            }
        }

        input
    }
}

fn steer(input: &mut TickInput, dir: Vec2) {
    input.left = dir.x < 0.0;
    input.right = dir.x > 0.0;
    input.up = dir.y < 0.0;
    input.down = dir.y > 0.0;
}
