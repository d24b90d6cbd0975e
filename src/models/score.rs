// src/models/score.rs

use serde::{Deserialize, Serialize};

/// One persisted outcome of a completed round.
///
/// Created once per submission and appended to the leaderboard; records are
/// never mutated or deleted afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub player: String,

    /// Correct answers this round, in `0..=question_count`.
    pub score: u32,

    /// Submission time; serialized as an RFC 3339 / ISO-8601 string.
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ScoreRecord {
    pub fn new(player: impl Into<String>, score: u32) -> Self {
        Self {
            player: player.into(),
            score,
            timestamp: chrono::Utc::now(),
        }
    }
}
