//! Keyword-overlap answer evaluator
//!
//! Scores an answer by the share of reference-answer keywords it mentions.
//! Crude, but deterministic and offline, which makes it the default for
//! local practice runs.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::collaborators::{AnswerEvaluator, Evaluation, EvaluationRequest};
use crate::error::CollaboratorError;

const MIN_KEYWORD_LEN: usize = 3;

const STOP_WORDS: &[&str] = &[
    "and", "are", "but", "can", "does", "each", "for", "from", "has", "have", "how", "into",
    "its", "not", "one", "only", "over", "such", "than", "that", "the", "their", "them",
    "then", "there", "these", "they", "this", "use", "used", "was", "what", "when", "where",
    "which", "while", "who", "why", "will", "with", "you", "your",
];

/// Deterministic evaluator based on keyword coverage
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordEvaluator;

impl KeywordEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Score `answer` against `reference`
    pub fn grade(&self, answer: &str, reference: &str) -> Evaluation {
        let answer_words = keywords(answer);
        if answer_words.is_empty() {
            return Evaluation {
                score: 0.0,
                explanation: "No answer was given.".to_string(),
            };
        }

        let expected = keywords(reference);
        if expected.is_empty() {
            return Evaluation {
                score: 1.0,
                explanation: "The reference answer has no key terms to compare against."
                    .to_string(),
            };
        }

        let (matched, missing): (Vec<&String>, Vec<&String>) =
            expected.iter().partition(|word| answer_words.contains(*word));
        let score = matched.len() as f64 / expected.len() as f64;

        let mut explanation = format!(
            "Covered {} of {} key terms.",
            matched.len(),
            expected.len()
        );
        if !matched.is_empty() {
            explanation.push_str(&format!(" Mentioned: {}.", join(&matched)));
        }
        if !missing.is_empty() {
            explanation.push_str(&format!(" Missing: {}.", join(&missing)));
        }

        Evaluation { score, explanation }
    }
}

#[async_trait]
impl AnswerEvaluator for KeywordEvaluator {
    async fn evaluate(&self, request: EvaluationRequest) -> Result<Evaluation, CollaboratorError> {
        Ok(self.grade(&request.answer, &request.reference_answer))
    }
}

/// Lowercased significant words
fn keywords(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.len() >= MIN_KEYWORD_LEN)
        .map(str::to_lowercase)
        .filter(|word| !STOP_WORDS.contains(&word.as_str()))
        .collect()
}

fn join(words: &[&String]) -> String {
    words
        .iter()
        .map(|w| w.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
