// src/quiz.rs

use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::question::Question;

/// One question as presented to the player: prompt plus shuffled options.
#[derive(Debug, Clone)]
pub struct PreparedQuestion {
    pub prompt: String,
    pub options: Vec<String>,
}

/// A prepared round: the presented questions and, held separately, the
/// answer key.
///
/// The key lives outside the presented options on purpose. Grading looks up
/// the correct index per question instead of re-deriving correctness from
/// the (shuffled) option labels, so duplicate labels cannot confuse it.
#[derive(Debug, Clone)]
pub struct Round {
    questions: Vec<PreparedQuestion>,
    answer_key: Vec<usize>,
}

impl Round {
    /// Prepares a round: for each question, in input order, shuffles the
    /// correct answer together with the distractors into a uniformly random
    /// display order (Fisher–Yates) and records where the correct one landed.
    pub fn prepare(questions: Vec<Question>, rng: &mut impl Rng) -> Self {
        let mut prepared = Vec::with_capacity(questions.len());
        let mut answer_key = Vec::with_capacity(questions.len());

        for question in questions {
            let mut tagged: Vec<(String, bool)> = question
                .incorrect_answers
                .into_iter()
                .map(|label| (label, false))
                .collect();
            tagged.push((question.correct_answer, true));
            tagged.shuffle(rng);

            // Exactly one entry carries the tag, by construction.
            let correct = tagged.iter().position(|(_, is_correct)| *is_correct);
            answer_key.push(correct.unwrap_or(0));

            prepared.push(PreparedQuestion {
                prompt: question.text,
                options: tagged.into_iter().map(|(label, _)| label).collect(),
            });
        }

        Self {
            questions: prepared,
            answer_key,
        }
    }

    pub fn questions(&self) -> &[PreparedQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Answer-key lookup: the index of the correct option for question `i`.
    pub fn correct_index(&self, i: usize) -> usize {
        self.answer_key[i]
    }

    /// Grades the player's selections against the answer key.
    ///
    /// `selections[i]` is the chosen option index for question `i`, or
    /// `None` when the question was skipped. Skipped, wrong and out-of-range
    /// selections all contribute 0; only an exact match on the key counts.
    /// Pure function of the arguments; no state is touched.
    pub fn grade(&self, selections: &[Option<usize>]) -> u32 {
        self.answer_key
            .iter()
            .zip(selections.iter().chain(std::iter::repeat(&None)))
            .filter(|(correct, selected)| **selected == Some(**correct))
            .count() as u32
    }
}
