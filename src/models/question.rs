// src/models/question.rs

use serde::{Deserialize, Serialize};

/// One multiple-choice question as the game uses it.
///
/// Immutable once fetched. All strings are already entity-decoded plain
/// text; the raw API payload never leaves the fetch boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// The question text shown as the prompt.
    pub text: String,

    /// The single correct answer.
    pub correct_answer: String,

    /// The distractors, in API order.
    pub incorrect_answers: Vec<String>,
}

impl Question {
    /// Total number of answer options this question presents.
    pub fn option_count(&self) -> usize {
        self.incorrect_answers.len() + 1
    }
}

/// Raw Open Trivia DB response: `{ "response_code": .., "results": [..] }`.
///
/// `response_code` 0 means success; any other value is the API refusing the
/// request (not enough questions in the pool, invalid parameter, ...).
#[derive(Debug, Deserialize)]
pub struct TriviaResponse {
    pub response_code: u8,
    #[serde(default)]
    pub results: Vec<ApiQuestion>,
}

/// One entry of the API's `results` list.
///
/// Strings arrive HTML-entity escaped; the category/difficulty metadata the
/// API also sends is ignored here.
#[derive(Debug, Deserialize)]
pub struct ApiQuestion {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}
