// tests/session_tests.rs
//
// End-to-end session scenarios against an in-memory question source, a
// scripted screen and throwaway store files.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use trivia_night::error::AppError;
use trivia_night::models::question::Question;
use trivia_night::quiz::Round;
use trivia_night::screen::{GameScreen, PlayerAction};
use trivia_night::session::{SessionController, SessionState};
use trivia_night::sources::QuestionSource;
use trivia_night::storage::cookies::CookieJar;
use trivia_night::storage::leaderboard::LeaderboardStore;

fn temp_file(prefix: &str) -> PathBuf {
    std::env::temp_dir().join(format!("trivia-night-{}-{}", prefix, uuid::Uuid::new_v4()))
}

fn question_batch(n: usize) -> Vec<Question> {
    (0..n)
        .map(|i| Question {
            text: format!("Question {}?", i),
            correct_answer: format!("right-{}", i),
            incorrect_answers: vec![
                format!("wrong-{}-a", i),
                format!("wrong-{}-b", i),
                format!("wrong-{}-c", i),
            ],
        })
        .collect()
}

/// Serves pre-loaded batches; an exhausted source reports a fetch failure,
/// which ends the game loop the same way a network failure does.
struct FakeSource {
    batches: Mutex<VecDeque<Result<Vec<Question>, AppError>>>,
}

impl FakeSource {
    fn new(batches: Vec<Result<Vec<Question>, AppError>>) -> Self {
        Self {
            batches: Mutex::new(batches.into()),
        }
    }
}

#[async_trait]
impl QuestionSource for FakeSource {
    async fn fetch_round(&self) -> Result<Vec<Question>, AppError> {
        self.batches
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Fetch("out of fixtures".to_string())))
    }
}

/// One scripted response to a presented round.
enum Script {
    /// Answer the first `correct` questions correctly, the rest wrong,
    /// and type `name_field` at the name prompt (if shown).
    Play {
        correct: usize,
        name_field: &'static str,
    },
    NewPlayer,
    Quit,
}

/// Screen fake: plays back a script and records every command the
/// controller issues, so tests can assert on the display sequence.
struct ScriptedScreen {
    script: Mutex<VecDeque<Script>>,
    events: Arc<Mutex<Vec<String>>>,
}

impl ScriptedScreen {
    fn new(script: Vec<Script>) -> (Self, Arc<Mutex<Vec<String>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let screen = Self {
            script: Mutex::new(script.into()),
            events: events.clone(),
        };
        (screen, events)
    }

    fn log(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl GameScreen for ScriptedScreen {
    fn greet(&mut self, player: &str) {
        self.log(format!("greet:{}", player));
    }

    fn prompt_for_name(&mut self) {
        self.log("prompt".to_string());
    }

    fn loading(&mut self) {
        self.log("loading".to_string());
    }

    fn clear_loading(&mut self) {
        self.log("clear-loading".to_string());
    }

    fn notice(&mut self, message: &str) {
        self.log(format!("notice:{}", message));
    }

    fn play_round(&mut self, round: &Round, anonymous: bool) -> PlayerAction {
        self.log(format!("round:{}:anonymous={}", round.len(), anonymous));

        match self.script.lock().unwrap().pop_front() {
            Some(Script::Play {
                correct,
                name_field,
            }) => {
                let selections = (0..round.len())
                    .map(|i| {
                        let key = round.correct_index(i);
                        if i < correct {
                            Some(key)
                        } else {
                            Some((key + 1) % round.questions()[i].options.len())
                        }
                    })
                    .collect();
                PlayerAction::Submit {
                    selections,
                    name_field: name_field.to_string(),
                }
            }
            Some(Script::NewPlayer) => PlayerAction::NewPlayer,
            Some(Script::Quit) | None => PlayerAction::Quit,
        }
    }

    fn report_score(&mut self, player: &str, score: u32, total: usize, _best: Option<u32>) {
        self.log(format!("score:{}:{}/{}", player, score, total));
    }

    fn show_leaderboard(&mut self, records: &[trivia_night::models::score::ScoreRecord]) {
        self.log(format!("leaderboard:{}", records.len()));
    }
}

struct TestHarness {
    controller: SessionController<FakeSource, ScriptedScreen>,
    events: Arc<Mutex<Vec<String>>>,
    jar_path: PathBuf,
    board_path: PathBuf,
}

fn harness(script: Vec<Script>, batches: Vec<Result<Vec<Question>, AppError>>) -> TestHarness {
    let jar_path = temp_file("jar");
    let board_path = temp_file("board");
    let (screen, events) = ScriptedScreen::new(script);
    let controller = SessionController::new(
        FakeSource::new(batches),
        screen,
        CookieJar::new(&jar_path),
        LeaderboardStore::new(&board_path),
    );
    TestHarness {
        controller,
        events,
        jar_path,
        board_path,
    }
}

#[tokio::test]
async fn fresh_session_identifies_player_and_records_score() {
    // Arrange: no cookie, empty leaderboard; Bob gets 3 of 10 right.
    let mut t = harness(
        vec![
            Script::Play {
                correct: 3,
                name_field: "Bob",
            },
            Script::Quit,
        ],
        vec![Ok(question_batch(10)), Ok(question_batch(10))],
    );

    // Act
    t.controller.run().await.expect("session failed");

    // Assert: the name entry was shown first, the round ran anonymously.
    let events = t.events.lock().unwrap();
    assert_eq!(events[0], "prompt");
    assert!(events.contains(&"round:10:anonymous=true".to_string()));
    assert!(events.contains(&"score:Bob:3/10".to_string()));

    // The leaderboard holds exactly the one record.
    let records = LeaderboardStore::new(&t.board_path).load_all();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].player, "Bob");
    assert_eq!(records[0].score, 3);

    // The identity re-check after submission greeted Bob.
    assert!(events.contains(&"greet:Bob".to_string()));
    assert_eq!(CookieJar::new(&t.jar_path).get("username"), Some("Bob".to_string()));
}

#[tokio::test]
async fn existing_cookie_is_not_rewritten_but_every_round_is_recorded() {
    // Arrange: Bob is already identified from an earlier run.
    let jar_path = temp_file("jar");
    CookieJar::new(&jar_path).set("username", "Bob", 7).unwrap();
    let jar_before = std::fs::read_to_string(&jar_path).unwrap();

    let board_path = temp_file("board");
    let (screen, events) = ScriptedScreen::new(vec![
        Script::Play {
            correct: 5,
            name_field: "",
        },
        Script::Play {
            correct: 8,
            name_field: "",
        },
        Script::Quit,
    ]);
    let mut controller = SessionController::new(
        FakeSource::new(vec![
            Ok(question_batch(10)),
            Ok(question_batch(10)),
            Ok(question_batch(10)),
        ]),
        screen,
        CookieJar::new(&jar_path),
        LeaderboardStore::new(&board_path),
    );

    // Act
    controller.run().await.expect("session failed");

    // Assert: no cookie write occurred; the jar file is byte-identical.
    assert_eq!(std::fs::read_to_string(&jar_path).unwrap(), jar_before);

    // Both rounds were played identified and both were recorded.
    let records = LeaderboardStore::new(&board_path).load_all();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].score, 5);
    assert_eq!(records[1].score, 8);

    let events = events.lock().unwrap();
    assert_eq!(events[0], "greet:Bob");
    assert!(events.contains(&"round:10:anonymous=false".to_string()));
}

#[tokio::test]
async fn new_player_action_clears_identity() {
    // Arrange: Bob is identified.
    let jar_path = temp_file("jar");
    CookieJar::new(&jar_path).set("username", "Bob", 7).unwrap();

    let (screen, events) = ScriptedScreen::new(vec![Script::NewPlayer, Script::Quit]);
    let mut controller = SessionController::new(
        FakeSource::new(vec![Ok(question_batch(10)), Ok(question_batch(10))]),
        screen,
        CookieJar::new(&jar_path),
        LeaderboardStore::new(temp_file("board")),
    );

    // Act
    controller.run().await.expect("session failed");

    // Assert: the cookie is gone and the identity check reverted to the
    // name entry.
    assert_eq!(CookieJar::new(&jar_path).get("username"), None);
    let events = events.lock().unwrap();
    assert_eq!(events[0], "greet:Bob");
    assert!(events.contains(&"prompt".to_string()));
    assert_eq!(*controller.state(), SessionState::QuizReady);
}

#[tokio::test]
async fn blank_name_defaults_to_anonymous() {
    let mut t = harness(
        vec![
            Script::Play {
                correct: 0,
                name_field: "   ",
            },
            Script::Quit,
        ],
        vec![Ok(question_batch(10)), Ok(question_batch(10))],
    );

    t.controller.run().await.expect("session failed");

    let records = LeaderboardStore::new(&t.board_path).load_all();
    assert_eq!(records[0].player, "Anonymous");
    assert_eq!(
        CookieJar::new(&t.jar_path).get("username"),
        Some("Anonymous".to_string())
    );
}

#[tokio::test]
async fn fetch_failure_degrades_without_a_quiz() {
    // Arrange: the source fails immediately.
    let mut t = harness(
        vec![],
        vec![Err(AppError::Fetch("connection refused".to_string()))],
    );

    // Act: the run ends cleanly; there is no retry.
    t.controller.run().await.expect("session failed");

    // Assert: loading was cleared, a notice was shown, no round ran and
    // nothing was persisted.
    let events = t.events.lock().unwrap();
    assert!(events.contains(&"clear-loading".to_string()));
    assert!(events.iter().any(|e| e.starts_with("notice:")));
    assert!(!events.iter().any(|e| e.starts_with("round:")));
    assert!(LeaderboardStore::new(&t.board_path).load_all().is_empty());
    assert_eq!(*t.controller.state(), SessionState::Anonymous);
}

#[tokio::test]
async fn submit_is_rejected_without_an_outstanding_round() {
    // Arrange: a controller that never started a round.
    let mut t = harness(vec![], vec![]);
    let round = Round::prepare(question_batch(3), &mut rand::thread_rng());

    // Act
    let result = t.controller.submit(&round, &[None, None, None], "Mallory");

    // Assert
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    assert!(LeaderboardStore::new(&t.board_path).load_all().is_empty());
}

#[tokio::test]
async fn state_walks_through_the_round_lifecycle() {
    let mut t = harness(vec![], vec![Ok(question_batch(4))]);

    assert_eq!(*t.controller.state(), SessionState::Anonymous);

    t.controller.check_identity();
    assert_eq!(*t.controller.state(), SessionState::Anonymous);

    let round = t.controller.start_round().await.expect("no round");
    assert_eq!(*t.controller.state(), SessionState::QuizReady);

    let selections: Vec<Option<usize>> =
        (0..round.len()).map(|i| Some(round.correct_index(i))).collect();
    let record = t
        .controller
        .submit(&round, &selections, "Ada")
        .expect("submit failed");

    assert_eq!(record.score, 4);
    // Submission ends with the identity re-check.
    assert_eq!(*t.controller.state(), SessionState::Identified("Ada".to_string()));
}

#[tokio::test]
async fn overlong_name_is_rejected_and_nothing_is_persisted() {
    let long_name: &'static str = Box::leak("x".repeat(60).into_boxed_str());
    let mut t = harness(
        vec![
            Script::Play {
                correct: 2,
                name_field: long_name,
            },
            Script::Quit,
        ],
        vec![Ok(question_batch(10)), Ok(question_batch(10))],
    );

    t.controller.run().await.expect("session failed");

    // The submission was rejected: no cookie, no record, and the player
    // saw a notice.
    assert_eq!(CookieJar::new(&t.jar_path).get("username"), None);
    assert!(LeaderboardStore::new(&t.board_path).load_all().is_empty());
    let events = t.events.lock().unwrap();
    assert!(events.iter().any(|e| e.starts_with("notice:")));
}
