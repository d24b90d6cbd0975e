// src/storage/leaderboard.rs

use std::fs;
use std::path::PathBuf;

use crate::error::AppError;
use crate::models::score::ScoreRecord;

/// Append-only leaderboard persisted as a single JSON array blob.
///
/// The whole collection is read and rewritten on every append. That is a
/// full read-modify-write per submission, which stays cheap because the
/// file only ever grows by one small record per played round. Not atomic
/// across concurrent program instances; single-instance use is assumed.
pub struct LeaderboardStore {
    path: PathBuf,
}

impl LeaderboardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns every persisted record in insertion (chronological) order.
    ///
    /// A missing or unparseable blob reads as an empty leaderboard; this
    /// never fails.
    pub fn load_all(&self) -> Vec<ScoreRecord> {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };

        serde_json::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!("Leaderboard blob unparseable, treating as empty: {}", e);
            Vec::new()
        })
    }

    /// Appends one record and rewrites the blob.
    pub fn append(&self, record: ScoreRecord) -> Result<(), AppError> {
        let mut records = self.load_all();
        records.push(record);

        let blob = serde_json::to_string_pretty(&records)?;
        fs::write(&self.path, blob)?;
        Ok(())
    }

    /// The player's personal best across all persisted rounds.
    pub fn best_for(&self, player: &str) -> Option<u32> {
        self.load_all()
            .iter()
            .filter(|record| record.player == player)
            .map(|record| record.score)
            .max()
    }
}
