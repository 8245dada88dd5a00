//! Spelling quiz over the words of one topic.
//!
//! The learner sees each translation and types the source word. Grading is
//! lenient on surrounding whitespace, letter case and Unicode composition,
//! and strict on everything else.

use std::collections::{HashMap, HashSet};

use rand::seq::SliceRandom;
use unicode_normalization::UnicodeNormalization;

use crate::model::Word;

/// A quiz in progress, or graded if `result` is set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quiz {
    /// Word ids in the order they are asked
    pub order: Vec<String>,
    /// Typed answers by word id
    pub answers: HashMap<String, String>,
    pub result: Option<QuizResult>,
}

/// Outcome of grading a quiz
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub correct: usize,
    pub total: usize,
    /// 0 to 100
    pub score: u32,
    /// Whether each word was answered correctly, by word id
    pub marks: HashMap<String, bool>,
}

impl Quiz {
    /// Start a quiz on `words` asked in `order`.
    ///
    /// Ids in `order` that are not in `words` are dropped, and words missing
    /// from `order` are asked last in their listed order. Returns `None` when
    /// there is nothing to ask.
    pub fn start(words: &[Word], order: &[String]) -> Option<Self> {
        if words.is_empty() {
            return None;
        }

        let known: HashSet<&str> = words.iter().map(|w| w.id.as_str()).collect();
        let mut seen = HashSet::new();
        let mut arranged = Vec::with_capacity(words.len());
        for id in order {
            if known.contains(id.as_str()) && seen.insert(id.as_str()) {
                arranged.push(id.clone());
            }
        }
        arranged.extend(
            words
                .iter()
                .filter(|w| !seen.contains(w.id.as_str()))
                .map(|w| w.id.clone()),
        );

        Some(Self {
            order: arranged,
            answers: HashMap::new(),
            result: None,
        })
    }

    /// Record the typed answer for `word_id`, replacing any earlier one.
    /// Ignored for words not in the quiz.
    pub fn answer(&mut self, word_id: &str, answer: impl Into<String>) {
        if self.order.iter().any(|id| id == word_id) {
            self.answers.insert(word_id.to_string(), answer.into());
        }
    }

    /// Grade every asked word against `words`. Unanswered words count as wrong.
    pub fn grade(&self, words: &[Word]) -> QuizResult {
        let marks: HashMap<String, bool> = self
            .order
            .iter()
            .map(|id| {
                let typed = self.answers.get(id).map(String::as_str).unwrap_or("");
                let expected = words.iter().find(|w| &w.id == id).map(|w| w.en.as_str());
                let correct = expected.is_some_and(|en| is_correct(typed, en));
                (id.clone(), correct)
            })
            .collect();

        let correct = marks.values().filter(|&&ok| ok).count();
        let total = self.order.len();

        QuizResult {
            correct,
            total,
            score: score(correct, total),
            marks,
        }
    }
}

/// Trim, NFC-compose and lowercase an answer for comparison
pub fn normalize_answer(s: &str) -> String {
    s.trim().nfc().collect::<String>().to_lowercase()
}

pub fn is_correct(typed: &str, expected: &str) -> bool {
    normalize_answer(typed) == normalize_answer(expected)
}

/// Percentage of correct answers, rounded half up
pub fn score(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (correct as f64 / total as f64 * 100.0).round() as u32
}

/// Word ids of `words` in random order, for [`crate::Action::QuizStarted`]
pub fn shuffled_order(words: &[Word]) -> Vec<String> {
    let mut order: Vec<String> = words.iter().map(|w| w.id.clone()).collect();
    order.shuffle(&mut rand::thread_rng());
    order
}
