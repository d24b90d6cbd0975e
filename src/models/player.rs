// src/models/player.rs

use validator::Validate;

use crate::config::DEFAULT_PLAYER;
use crate::error::AppError;

/// DTO for the submitted player name.
#[derive(Debug, Validate)]
pub struct PlayerName {
    #[validate(length(max = 50, message = "Player name must be at most 50 characters."))]
    pub name: String,
}

impl PlayerName {
    /// Normalizes and validates a submitted name field.
    ///
    /// Leading/trailing whitespace is dropped; a blank field falls back to
    /// the default player name rather than being rejected.
    pub fn parse(input: &str) -> Result<String, AppError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(DEFAULT_PLAYER.to_string());
        }

        let candidate = PlayerName {
            name: trimmed.to_string(),
        };
        candidate
            .validate()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?;

        Ok(candidate.name)
    }
}
