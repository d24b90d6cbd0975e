// src/screen.rs

use std::io::{self, BufRead, Write};

use crate::models::score::ScoreRecord;
use crate::quiz::Round;

/// What the player did with a presented round.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerAction {
    /// Answers submitted; `selections[i]` is the chosen option index for
    /// question `i` (`None` = skipped). `name_field` is whatever the player
    /// typed at the name prompt; it is empty when no prompt was shown.
    Submit {
        selections: Vec<Option<usize>>,
        name_field: String,
    },
    /// The "new player" control: forget the stored identity.
    NewPlayer,
    Quit,
}

/// The UI surface the session controller issues commands against.
///
/// Mirrors the named elements of the original page (greeting, name entry,
/// loading indicator, question container, leaderboard table) as trait
/// methods, so there is no element lookup that could miss and tests can
/// swap in a scripted screen.
pub trait GameScreen {
    /// Greets an identified player and suppresses the name entry.
    fn greet(&mut self, player: &str);

    /// Shows the name entry for an anonymous session.
    fn prompt_for_name(&mut self);

    /// Shows the loading indicator while a fetch is in flight.
    fn loading(&mut self);

    /// Clears the loading indicator.
    fn clear_loading(&mut self);

    /// A visible notice (fetch failures, rejected input).
    fn notice(&mut self, message: &str);

    /// Presents a prepared round and collects the player's response.
    /// `anonymous` controls whether the name field is shown.
    fn play_round(&mut self, round: &Round, anonymous: bool) -> PlayerAction;

    /// Reports the graded score for the round just played.
    fn report_score(&mut self, player: &str, score: u32, total: usize, personal_best: Option<u32>);

    /// Renders the full leaderboard, chronological order.
    fn show_leaderboard(&mut self, records: &[ScoreRecord]);
}

/// stdin/stdout implementation for the interactive binary.
///
/// Selection is a 1-based digit per question, Enter skips, `!new` switches
/// player, `!quit` leaves the game.
pub struct ConsoleScreen;

impl ConsoleScreen {
    pub fn new() -> Self {
        Self
    }

    /// Reads one trimmed line; EOF reads as `!quit` so a closed stdin
    /// ends the game instead of looping.
    fn read_line(&self) -> String {
        let mut buf = String::new();
        match io::stdin().lock().read_line(&mut buf) {
            Ok(0) | Err(_) => "!quit".to_string(),
            Ok(_) => buf.trim().to_string(),
        }
    }

    fn prompt(&self, text: &str) {
        print!("{}", text);
        let _ = io::stdout().flush();
    }
}

impl Default for ConsoleScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl GameScreen for ConsoleScreen {
    fn greet(&mut self, player: &str) {
        println!("\nWelcome back, {}!", player);
        println!("(type !new during a round to switch player, !quit to leave)");
    }

    fn prompt_for_name(&mut self) {
        println!("\nWelcome to Trivia Night! You'll be asked for a name when you submit.");
        println!("(type !quit during a round to leave)");
    }

    fn loading(&mut self) {
        println!("\nLoading questions...");
    }

    fn clear_loading(&mut self) {
        // A printed line cannot be retracted; the next output supersedes it.
    }

    fn notice(&mut self, message: &str) {
        println!("\n! {}", message);
    }

    fn play_round(&mut self, round: &Round, anonymous: bool) -> PlayerAction {
        let mut selections = Vec::with_capacity(round.len());

        for (number, question) in round.questions().iter().enumerate() {
            println!("\nQ{}. {}", number + 1, question.prompt);
            for (i, option) in question.options.iter().enumerate() {
                println!("  {}) {}", i + 1, option);
            }

            let selection = loop {
                self.prompt("Your answer (Enter to skip): ");
                let input = self.read_line();

                match input.as_str() {
                    "" => break None,
                    "!quit" => return PlayerAction::Quit,
                    "!new" => return PlayerAction::NewPlayer,
                    digits => match digits.parse::<usize>() {
                        Ok(n) if n >= 1 && n <= question.options.len() => break Some(n - 1),
                        _ => println!("Pick 1-{} or press Enter to skip.", question.options.len()),
                    },
                }
            };
            selections.push(selection);
        }

        let name_field = if anonymous {
            self.prompt("\nYour name (Enter for Anonymous): ");
            let input = self.read_line();
            if input == "!quit" {
                return PlayerAction::Quit;
            }
            input
        } else {
            String::new()
        };

        PlayerAction::Submit {
            selections,
            name_field,
        }
    }

    fn report_score(&mut self, player: &str, score: u32, total: usize, personal_best: Option<u32>) {
        println!("\n{}, you scored {}/{}.", player, score, total);
        if let Some(best) = personal_best {
            if score >= best {
                println!("New personal best!");
            } else {
                println!("Personal best: {}.", best);
            }
        }
    }

    fn show_leaderboard(&mut self, records: &[ScoreRecord]) {
        println!("\n=== Leaderboard ===");
        if records.is_empty() {
            println!("(no rounds played yet)");
            return;
        }

        println!("{:<4} {:<20} {:>5}  {}", "#", "Player", "Score", "When");
        for (i, record) in records.iter().enumerate() {
            println!(
                "{:<4} {:<20} {:>5}  {}",
                i + 1,
                record.player,
                record.score,
                record.timestamp.format("%Y-%m-%d %H:%M")
            );
        }
    }
}
