// src/sources/opentdb.rs

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::config::Config;
use crate::error::AppError;
use crate::models::question::{Question, TriviaResponse};
use crate::utils::html::decode_entities;

/// Supplier of one round's worth of questions.
///
/// Seam for the session controller; tests substitute an in-memory fake.
#[async_trait]
pub trait QuestionSource {
    async fn fetch_round(&self) -> Result<Vec<Question>, AppError>;
}

/// Open Trivia DB client (`https://opentdb.com/api.php`).
pub struct OpenTdbSource {
    client: reqwest::Client,
    url: Url,
}

impl OpenTdbSource {
    /// Builds the client and the fully-parameterized request URL from
    /// configuration. The timeout bounds a hung request; elapse surfaces
    /// as a fetch error.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()?;

        let mut url = Url::parse(&config.api_url)
            .map_err(|e| AppError::Fetch(format!("invalid API URL: {}", e)))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("amount", &config.question_count.to_string());
            query.append_pair("type", "multiple");
            if let Some(difficulty) = &config.difficulty {
                query.append_pair("difficulty", difficulty);
            }
            if let Some(category) = config.category {
                query.append_pair("category", &category.to_string());
            }
        }

        Ok(Self { client, url })
    }
}

#[async_trait]
impl QuestionSource for OpenTdbSource {
    async fn fetch_round(&self) -> Result<Vec<Question>, AppError> {
        tracing::debug!("Fetching questions from {}", self.url);

        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Fetch(format!("HTTP {}", status)));
        }

        let body: TriviaResponse = response.json().await.map_err(|e| {
            if e.is_decode() {
                AppError::Decode(e.to_string())
            } else {
                AppError::Fetch(e.to_string())
            }
        })?;

        // Non-zero means the API refused the request (not enough questions
        // in the pool, bad parameter, ...).
        if body.response_code != 0 {
            return Err(AppError::Fetch(format!(
                "API refused the request (response_code {})",
                body.response_code
            )));
        }

        // Entity-decode at the boundary; the rest of the game sees plain text.
        let questions = body
            .results
            .into_iter()
            .map(|raw| Question {
                text: decode_entities(&raw.question),
                correct_answer: decode_entities(&raw.correct_answer),
                incorrect_answers: raw
                    .incorrect_answers
                    .iter()
                    .map(|label| decode_entities(label))
                    .collect(),
            })
            .collect();

        Ok(questions)
    }
}
