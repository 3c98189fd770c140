//! Per-frame simulation step
//!
//! Order within a running frame:
//! 1. sample the shadow toggle
//! 2. player
//! 3. bullets, then prune
//! 4. spawn scheduler
//! 5. enemies (may fire)
//! 6. player shots vs enemies
//! 7. prune enemies
//! 8. player vs hazards

use super::collision::{check_player, resolve_shots};
use super::enemy::Enemy;
use super::events::GameEvent;
use super::input::{Action, ActionInput};
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Clamp a host-supplied frame time into `[0, MAX_ELAPSED_MS]`; NaN becomes 0
pub fn sanitize_elapsed(elapsed_ms: f32) -> f32 {
    if elapsed_ms.is_nan() {
        return 0.0;
    }
    elapsed_ms.clamp(0.0, MAX_ELAPSED_MS)
}

/// Advance the game state by one frame.
///
/// Events pile up in the state until the host calls
/// [`GameState::drain_events`], normally once per frame.
pub fn tick(state: &mut GameState, input: &impl ActionInput, elapsed_ms: f32) {
    if state.phase == GamePhase::GameOver {
        if input.is_action_active(Action::Restart) {
            log::info!("Restarting (previous score {})", state.score);
            state.reset();
        }
        return;
    }

    let dt = sanitize_elapsed(elapsed_ms);
    state.frame += 1;

    state.shadow_active = input.is_action_active(Action::ShadowToggle);

    state
        .player
        .update(input, dt, &state.arena, &mut state.bullets);

    for bullet in &mut state.bullets {
        bullet.update();
    }
    let arena = state.arena;
    state
        .bullets
        .retain(|b| b.alive && b.within(&arena, BULLET_PRUNE_MARGIN));

    update_spawner(state, dt);

    let target = state.player.pos;
    for enemy in &mut state.enemies {
        enemy.update(dt, &arena, target, &mut state.rng, &mut state.bullets);
    }

    let hits = resolve_shots(&mut state.enemies, &mut state.bullets);
    for _ in 0..hits {
        state.award(KILL_SCORE);
    }

    let before = state.enemies.len();
    state.enemies.retain(|e| e.alive);
    let removed = before - state.enemies.len();
    for _ in 0..removed {
        state.push_event(GameEvent::EnemyDestroyed);
    }

    let contact = check_player(
        state.player.pos,
        state.shadow_active,
        &state.enemies,
        &mut state.bullets,
    );
    for _ in 0..contact.collected {
        state.push_event(GameEvent::CollectiblePicked);
        state.award(COLLECT_SCORE);
    }
    if contact.lethal {
        state.phase = GamePhase::GameOver;
        state.push_event(GameEvent::GameOver { score: state.score });
        log::info!("Game over at frame {} with score {}", state.frame, state.score);
    }
}

/// Spawn scheduler and the difficulty ramp
fn update_spawner(state: &mut GameState, dt: f32) {
    state.spawn_timer_ms += dt;
    if state.spawn_timer_ms > state.spawn_interval_ms && state.enemies.len() < MAX_ENEMIES {
        let enemy = Enemy::spawn(&mut state.rng, &state.arena);
        log::debug!(
            "Enemy spawned at x={:.0} (interval {}ms)",
            enemy.pos.x,
            state.spawn_interval_ms
        );
        state.enemies.push(enemy);
        state.push_event(GameEvent::EnemySpawned);
        state.spawn_timer_ms = 0.0;
        state.spawn_interval_ms =
            (state.spawn_interval_ms - SPAWN_INTERVAL_STEP_MS).max(SPAWN_INTERVAL_FLOOR_MS);
    }
}
