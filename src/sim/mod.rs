//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time supplied by the host, never read from a clock
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod bullet;
pub mod collision;
pub mod enemy;
pub mod events;
pub mod input;
pub mod player;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use bullet::{Bullet, BulletKind};
pub use collision::{PlayerContact, check_player, circles_overlap, resolve_shots};
pub use enemy::Enemy;
pub use events::{GameEvent, ScoreSink, forward_scores};
pub use input::{Action, ActionInput, TickInput};
pub use player::Player;
pub use snapshot::{BulletView, EnemyView, Snapshot};
pub use state::{Arena, GamePhase, GameState};
pub use tick::{sanitize_elapsed, tick};
