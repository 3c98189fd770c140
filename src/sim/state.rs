//! Game state and core simulation types
//!
//! A single owned value holds the whole session. `tick` mutates it in place;
//! nothing else keeps references into it between frames.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bullet::Bullet;
use super::enemy::Enemy;
use super::events::GameEvent;
use super::player::Player;
use super::snapshot::{BulletView, EnemyView, Snapshot};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Player was hit; waiting for restart
    GameOver,
}

/// Fixed arena dimensions for a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Wide enough for the enemy spawn band and the player hitbox on both axes
    pub fn is_playable(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width > 2.0 * ENEMY_SPAWN_INSET
            && self.width > PLAYER_WIDTH
            && self.height > PLAYER_HEIGHT
    }

    /// This arena if playable, otherwise the default one
    pub fn or_default(self) -> Self {
        if self.is_playable() {
            self
        } else {
            log::warn!(
                "Arena {}x{} is too small; using {}x{}",
                self.width,
                self.height,
                ARENA_WIDTH,
                ARENA_HEIGHT
            );
            Self::default()
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ARENA_WIDTH, ARENA_HEIGHT)
    }
}

/// Pending events kept when the host never drains; the oldest half is dropped past this
pub const MAX_PENDING_EVENTS: usize = 1024;

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Source of every random draw; not reseeded on restart
    pub rng: Pcg32,
    pub arena: Arena,
    pub phase: GamePhase,
    pub score: u64,
    /// Shadow world held this frame
    pub shadow_active: bool,
    /// Frames simulated while running since the last (re)start
    pub frame: u64,
    pub player: Player,
    /// Live bullets in creation order
    pub bullets: Vec<Bullet>,
    /// Live enemies in spawn order
    pub enemies: Vec<Enemy>,
    /// Time accumulated toward the next enemy spawn (ms)
    pub spawn_timer_ms: f32,
    /// Current spawn interval (ms), ramps down to a floor
    pub spawn_interval_ms: f32,
    /// Events since the host last drained them
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed.
    ///
    /// An arena too small to play in is replaced by the default one.
    pub fn new(arena: Arena, seed: u64) -> Self {
        let arena = arena.or_default();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            arena,
            phase: GamePhase::Running,
            score: 0,
            shadow_active: false,
            frame: 0,
            player: Player::new(&arena),
            bullets: Vec::new(),
            enemies: Vec::new(),
            spawn_timer_ms: 0.0,
            spawn_interval_ms: SPAWN_INTERVAL_START_MS,
            events: Vec::new(),
        }
    }

    /// Full reset to the start-of-game invariants, keeping arena and RNG stream
    pub fn reset(&mut self) {
        self.phase = GamePhase::Running;
        self.score = 0;
        self.shadow_active = false;
        self.frame = 0;
        self.player = Player::new(&self.arena);
        self.bullets.clear();
        self.enemies.clear();
        self.spawn_timer_ms = 0.0;
        self.spawn_interval_ms = SPAWN_INTERVAL_START_MS;
        self.push_event(GameEvent::Restarted);
        self.push_event(GameEvent::ScoreChanged(0));
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Add to the score and report the new total
    pub fn award(&mut self, points: u64) {
        self.score += points;
        self.push_event(GameEvent::ScoreChanged(self.score));
    }

    pub fn push_event(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            log::debug!("Event queue full; dropping {} oldest events", MAX_PENDING_EVENTS / 2);
            self.events.drain(..MAX_PENDING_EVENTS / 2);
        }
        self.events.push(event);
    }

    /// Pending events, oldest first
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events. Hosts should call this once per frame.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view for renderers
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            frame: self.frame,
            player: self.player.pos,
            bullets: self
                .bullets
                .iter()
                .map(|b| BulletView {
                    pos: b.pos,
                    radius: b.radius,
                    kind: b.kind,
                })
                .collect(),
            enemies: self
                .enemies
                .iter()
                .map(|e| EnemyView {
                    pos: e.pos,
                    radius: e.radius,
                })
                .collect(),
            shadow_active: self.shadow_active,
            game_over: self.is_game_over(),
            score: self.score,
        }
    }
}
