//! Semantic input actions
//!
//! The simulation never sees physical keys. Hosts answer "is this action
//! held right now?" through [`ActionInput`].

use serde::{Deserialize, Serialize};

/// Semantic actions the simulation reads each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Shoot,
    /// Drop to the slower movement speed
    Slow,
    /// Hold to enter the shadow world
    ShadowToggle,
    Restart,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::Shoot,
        Action::Slow,
        Action::ShadowToggle,
        Action::Restart,
    ];
}

/// Capability query for held actions.
///
/// Must be idempotent within a tick.
pub trait ActionInput {
    fn is_action_active(&self, action: Action) -> bool;
}

/// Input state for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub shoot: bool,
    pub slow: bool,
    pub shadow: bool,
    pub restart: bool,
}

impl TickInput {
    /// Build an input with exactly the given actions held
    pub fn from_actions(actions: &[Action]) -> Self {
        let mut input = Self::default();
        for &action in actions {
            input.set(action, true);
        }
        input
    }

    pub fn set(&mut self, action: Action, held: bool) {
        let slot = match action {
            Action::MoveUp => &mut self.up,
            Action::MoveDown => &mut self.down,
            Action::MoveLeft => &mut self.left,
            Action::MoveRight => &mut self.right,
            Action::Shoot => &mut self.shoot,
            Action::Slow => &mut self.slow,
            Action::ShadowToggle => &mut self.shadow,
            Action::Restart => &mut self.restart,
        };
        *slot = held;
    }
}

impl ActionInput for TickInput {
    fn is_action_active(&self, action: Action) -> bool {
        match action {
            Action::MoveUp => self.up,
            Action::MoveDown => self.down,
            Action::MoveLeft => self.left,
            Action::MoveRight => self.right,
            Action::Shoot => self.shoot,
            Action::Slow => self.slow,
            Action::ShadowToggle => self.shadow,
            Action::Restart => self.restart,
        }
    }
}
