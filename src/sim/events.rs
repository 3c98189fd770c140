//! Events emitted by the simulation for the host to consume

use serde::{Deserialize, Serialize};

/// Something the host may want to react to (HUD, audio, logging)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Score changed to the given value
    ScoreChanged(u64),
    EnemySpawned,
    EnemyDestroyed,
    CollectiblePicked,
    GameOver { score: u64 },
    Restarted,
}

/// Receives the score every time it changes
pub trait ScoreSink {
    fn score_changed(&mut self, score: u64);
}

impl<F: FnMut(u64)> ScoreSink for F {
    fn score_changed(&mut self, score: u64) {
        self(score)
    }
}

/// Push every score change in `events` to `sink`, in order
pub fn forward_scores<'a>(events: impl IntoIterator<Item = &'a GameEvent>, sink: &mut impl ScoreSink) {
    for event in events {
        if let GameEvent::ScoreChanged(score) = *event {
            sink.score_changed(score);
        }
    }
}
