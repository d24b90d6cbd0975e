// src/config.rs

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;

/// Name of the cookie that carries the player identity.
pub const IDENTITY_COOKIE: &str = "username";

/// Player name used when the name field is submitted blank.
pub const DEFAULT_PLAYER: &str = "Anonymous";

/// Identity cookie lifetime. Fixed, matching the original game.
pub const COOKIE_TTL_DAYS: i64 = 7;

/// File names inside the data directory.
pub const COOKIE_JAR_FILE: &str = "cookies.txt";
pub const LEADERBOARD_FILE: &str = "leaderboard.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub question_count: u8,
    pub difficulty: Option<String>,
    pub category: Option<u32>,
    pub fetch_timeout_secs: u64,
    pub data_dir: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let api_url = env::var("TRIVIA_API_URL")
            .unwrap_or_else(|_| "https://opentdb.com/api.php".to_string());

        let question_count = env::var("TRIVIA_QUESTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        // Optional Open Trivia DB filters; absent means "any".
        let difficulty = env::var("TRIVIA_DIFFICULTY").ok().filter(|v| !v.is_empty());
        let category = env::var("TRIVIA_CATEGORY").ok().and_then(|v| v.parse().ok());

        let fetch_timeout_secs = env::var("TRIVIA_FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let data_dir = env::var("TRIVIA_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Self {
            api_url,
            question_count,
            difficulty,
            category,
            fetch_timeout_secs,
            data_dir,
            rust_log,
        }
    }

    /// Path of the cookie jar file inside the data directory.
    pub fn cookie_jar_path(&self) -> PathBuf {
        self.data_dir.join(COOKIE_JAR_FILE)
    }

    /// Path of the leaderboard blob inside the data directory.
    pub fn leaderboard_path(&self) -> PathBuf {
        self.data_dir.join(LEADERBOARD_FILE)
    }
}
