//! Read-only view of the simulation for renderers

use glam::Vec2;
use serde::Serialize;

use super::bullet::BulletKind;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BulletView {
    pub pos: Vec2,
    pub radius: f32,
    pub kind: BulletKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnemyView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub frame: u64,
    pub player: Vec2,
    pub bullets: Vec<BulletView>,
    pub enemies: Vec<EnemyView>,
    pub shadow_active: bool,
    pub game_over: bool,
    pub score: u64,
}
