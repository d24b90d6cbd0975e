// src/main.rs

use dotenvy::dotenv;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use trivia_night::config::Config;
use trivia_night::screen::ConsoleScreen;
use trivia_night::session::SessionController;
use trivia_night::sources::OpenTdbSource;
use trivia_night::storage::cookies::CookieJar;
use trivia_night::storage::leaderboard::LeaderboardStore;

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    // The game owns stdout; logs go to stderr and the rolling file.
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    // The data directory holds the cookie jar and the leaderboard blob.
    if let Err(e) = std::fs::create_dir_all(&config.data_dir) {
        tracing::error!("Cannot create data directory {:?}: {}", config.data_dir, e);
        std::process::exit(1);
    }

    let source = match OpenTdbSource::new(&config) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!("Cannot build question source: {}", e);
            std::process::exit(1);
        }
    };

    let cookies = CookieJar::new(config.cookie_jar_path());
    let leaderboard = LeaderboardStore::new(config.leaderboard_path());
    let screen = ConsoleScreen::new();

    tracing::info!(
        "Trivia Night starting: {} questions per round from {}",
        config.question_count,
        config.api_url
    );

    let mut session = SessionController::new(source, screen, cookies, leaderboard);
    if let Err(e) = session.run().await {
        tracing::error!("Session ended with an error: {}", e);
        std::process::exit(1);
    }

    println!("\nThanks for playing!");
}
