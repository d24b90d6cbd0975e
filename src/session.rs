// src/session.rs

use crate::config::{COOKIE_TTL_DAYS, IDENTITY_COOKIE};
use crate::error::AppError;
use crate::models::player::PlayerName;
use crate::models::score::ScoreRecord;
use crate::quiz::Round;
use crate::screen::{GameScreen, PlayerAction};
use crate::sources::QuestionSource;
use crate::storage::cookies::CookieJar;
use crate::storage::leaderboard::LeaderboardStore;

/// Lifecycle state of the running session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No stored identity; the name entry is shown.
    Anonymous,
    /// A stored identity is active.
    Identified(String),
    /// A question fetch is in flight.
    Loading,
    /// A round is prepared and awaiting submission.
    QuizReady,
    /// A submission was just graded and persisted.
    Graded,
}

/// Orchestrates the game lifecycle: identify-or-prompt the player, fetch,
/// present, grade, persist, redisplay the leaderboard, next round.
///
/// All collaborators are injected at construction, so tests run the full
/// lifecycle against in-memory fakes and throwaway store files.
pub struct SessionController<Src, Scr> {
    source: Src,
    screen: Scr,
    cookies: CookieJar,
    leaderboard: LeaderboardStore,
    state: SessionState,
}

impl<Src: QuestionSource, Scr: GameScreen> SessionController<Src, Scr> {
    pub fn new(source: Src, screen: Scr, cookies: CookieJar, leaderboard: LeaderboardStore) -> Self {
        Self {
            source,
            screen,
            cookies,
            leaderboard,
            state: SessionState::Anonymous,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Reads the identity cookie and drives the greeting/name-entry toggle.
    /// Returns the active identity, if any.
    pub fn check_identity(&mut self) -> Option<String> {
        match self.cookies.get(IDENTITY_COOKIE) {
            Some(player) => {
                self.screen.greet(&player);
                self.state = SessionState::Identified(player.clone());
                Some(player)
            }
            None => {
                self.screen.prompt_for_name();
                self.state = SessionState::Anonymous;
                None
            }
        }
    }

    /// Fetches and prepares the next round.
    ///
    /// On fetch failure the error is logged, the loading indicator is
    /// cleared, a notice is shown and no round is returned; there is no
    /// automatic retry.
    pub async fn start_round(&mut self) -> Option<Round> {
        self.state = SessionState::Loading;
        self.screen.loading();

        match self.source.fetch_round().await {
            Ok(questions) => {
                self.screen.clear_loading();
                let round = Round::prepare(questions, &mut rand::thread_rng());
                tracing::info!("Round ready: {} questions", round.len());
                self.state = SessionState::QuizReady;
                Some(round)
            }
            Err(e) => {
                tracing::error!("Failed to load questions: {}", e);
                self.screen.clear_loading();
                self.screen
                    .notice("Could not load questions. Please try again later.");
                // Back to the neutral display state for the current identity.
                self.state = match self.cookies.get(IDENTITY_COOKIE) {
                    Some(player) => SessionState::Identified(player),
                    None => SessionState::Anonymous,
                };
                None
            }
        }
    }

    /// Grades and persists a submitted round, then redisplays the
    /// leaderboard and re-checks identity. Valid only with a round
    /// outstanding.
    ///
    /// If no identity cookie exists, one is derived from the submitted name
    /// field (blank falls back to the default) and persisted with the fixed
    /// TTL; an existing cookie is left untouched.
    pub fn submit(
        &mut self,
        round: &Round,
        selections: &[Option<usize>],
        name_field: &str,
    ) -> Result<ScoreRecord, AppError> {
        if self.state != SessionState::QuizReady {
            return Err(AppError::InvalidInput(
                "no round is awaiting submission".to_string(),
            ));
        }

        let player = match self.cookies.get(IDENTITY_COOKIE) {
            Some(existing) => existing,
            None => {
                let name = PlayerName::parse(name_field)?;
                self.cookies.set(IDENTITY_COOKIE, &name, COOKIE_TTL_DAYS)?;
                tracing::info!("New player identified: {}", name);
                name
            }
        };

        let score = round.grade(selections);
        let record = ScoreRecord::new(player.clone(), score);
        self.leaderboard.append(record.clone())?;
        self.state = SessionState::Graded;
        tracing::info!("Round graded: {} scored {}/{}", player, score, round.len());

        let best = self.leaderboard.best_for(&player);
        self.screen.report_score(&player, score, round.len(), best);
        self.screen.show_leaderboard(&self.leaderboard.load_all());
        self.check_identity();

        Ok(record)
    }

    /// The "new player" action: clears the stored identity. The next
    /// identity check reverts to the name entry.
    pub fn new_player(&mut self) -> Result<(), AppError> {
        self.cookies.clear(IDENTITY_COOKIE)?;
        tracing::info!("Player identity cleared");
        Ok(())
    }

    /// Runs the game loop until the player quits or a round cannot be
    /// loaded. Submission immediately starts the next round.
    pub async fn run(&mut self) -> Result<(), AppError> {
        self.check_identity();

        loop {
            let Some(round) = self.start_round().await else {
                return Ok(());
            };

            let anonymous = self.cookies.get(IDENTITY_COOKIE).is_none();
            match self.screen.play_round(&round, anonymous) {
                PlayerAction::Submit {
                    selections,
                    name_field,
                } => match self.submit(&round, &selections, &name_field) {
                    Ok(_) => {}
                    Err(AppError::InvalidInput(msg)) => {
                        self.screen.notice(&msg);
                        self.check_identity();
                    }
                    Err(e) => return Err(e),
                },
                PlayerAction::NewPlayer => {
                    self.new_player()?;
                    self.check_identity();
                }
                PlayerAction::Quit => {
                    tracing::info!("Player quit");
                    return Ok(());
                }
            }
        }
    }
}
