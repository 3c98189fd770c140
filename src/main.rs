//! Shadow Shooter headless runner
//!
//! Runs the simulation at a fixed frame step, optionally driven by the
//! autopilot, and prints the final snapshot as JSON.
//!
//! Usage: `shadow-shooter [settings.json]`

use std::path::PathBuf;

use shadow_shooter::sim::{GameEvent, GameState, TickInput, forward_scores, tick};
use shadow_shooter::{Autopilot, Settings};

fn main() {
    env_logger::init();
    log::info!("Shadow Shooter (headless) starting...");

    let settings = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load(&path),
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };

    let mut state = GameState::new(settings.arena(), settings.seed);
    let autopilot = Autopilot::new();
    let frame_ms = settings.effective_frame_ms();
    log::info!(
        "Game initialized with seed {} ({}x{} arena, {} frames of {:.2}ms)",
        settings.seed,
        state.arena.width,
        state.arena.height,
        settings.max_frames,
        frame_ms
    );

    let mut runs = 1u32;
    let mut best = 0u64;
    let mut report_score = |score: u64| log::debug!("Score: {score}");

    for _ in 0..settings.max_frames {
        let input = if settings.autopilot {
            autopilot.next_input(&state)
        } else {
            TickInput::default()
        };
        tick(&mut state, &input, frame_ms);

        let events = state.drain_events();
        forward_scores(&events, &mut report_score);
        for event in &events {
            match event {
                GameEvent::GameOver { score } => best = best.max(*score),
                GameEvent::Restarted => runs += 1,
                _ => {}
            }
        }
    }
    best = best.max(state.score);

    log::info!("Finished after {runs} run(s), best score {best}");
    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to encode final snapshot: {e}"),
    }
}
