//! Scripted collaborators for tests
//!
//! These doubles make controller behaviour deterministic: queue the scores
//! an evaluator should return, inject failures on the next call, or add a
//! delay to exercise collaborator timeouts.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use super::{
    AnswerEvaluator, Evaluation, EvaluationRequest, GeneratedQuestion, QuestionGenerator,
    QuestionRequest, TranscriptSink,
};
use crate::error::CollaboratorError;
use crate::transcript::Transcript;

/// Score returned by [`ScriptedEvaluator`] when nothing is queued
const NEUTRAL_SCORE: f64 = 0.5;

/// Question generator that numbers its questions and records every request
#[derive(Default)]
pub struct ScriptedQuestionGenerator {
    requests: Mutex<Vec<QuestionRequest>>,
    failures: Mutex<u32>,
    delay: Option<Duration>,
}

impl ScriptedQuestionGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep this long before answering each request
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Make the next `count` calls fail
    pub fn fail_next(&self, count: u32) {
        *self.failures.lock().unwrap_or_else(PoisonError::into_inner) += count;
    }

    /// Every request received so far, in order
    pub fn requests(&self) -> Vec<QuestionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl QuestionGenerator for ScriptedQuestionGenerator {
    async fn generate(&self, request: QuestionRequest) -> Result<GeneratedQuestion, CollaboratorError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        {
            let mut failures = self.failures.lock().unwrap_or_else(PoisonError::into_inner);
            if *failures > 0 {
                *failures -= 1;
                return Err(CollaboratorError::Unavailable(
                    "scripted generator failure".to_string(),
                ));
            }
        }

        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        let number = request.num_asked.max(1);
        Ok(GeneratedQuestion {
            question: format!(
                "Question {} ({}, difficulty {})",
                number, request.domain, request.difficulty
            ),
            reference_answer: format!("Reference answer {}", number),
        })
    }
}

enum ScriptedGrade {
    Score(f64),
    Failure,
}

/// Evaluator that returns queued scores in order
#[derive(Default)]
pub struct ScriptedEvaluator {
    grades: Mutex<VecDeque<ScriptedGrade>>,
    requests: Mutex<Vec<EvaluationRequest>>,
    delay: Option<Duration>,
}

impl ScriptedEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator with the given scores already queued
    pub fn with_scores(scores: impl IntoIterator<Item = f64>) -> Self {
        let evaluator = Self::new();
        for score in scores {
            evaluator.queue_score(score);
        }
        evaluator
    }

    /// Sleep this long before answering each request
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn queue_score(&self, score: f64) {
        self.grades
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(ScriptedGrade::Score(score));
    }

    /// Queue a failure; it is consumed in order with the scores
    pub fn queue_failure(&self) {
        self.grades
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(ScriptedGrade::Failure);
    }

    pub fn requests(&self) -> Vec<EvaluationRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl AnswerEvaluator for ScriptedEvaluator {
    async fn evaluate(&self, request: EvaluationRequest) -> Result<Evaluation, CollaboratorError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let grade = self
            .grades
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(ScriptedGrade::Score(NEUTRAL_SCORE));

        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        match grade {
            ScriptedGrade::Score(score) => Ok(Evaluation {
                score,
                explanation: format!("scripted score {}", score),
            }),
            ScriptedGrade::Failure => Err(CollaboratorError::Unavailable(
                "scripted evaluator failure".to_string(),
            )),
        }
    }
}

/// Transcript sink that keeps transcripts in memory
#[derive(Default)]
pub struct RecordingTranscriptSink {
    transcripts: Mutex<Vec<Transcript>>,
    failures: Mutex<u32>,
}

impl RecordingTranscriptSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `count` calls fail
    pub fn fail_next(&self, count: u32) {
        *self.failures.lock().unwrap_or_else(PoisonError::into_inner) += count;
    }

    pub fn transcripts(&self) -> Vec<Transcript> {
        self.transcripts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn persist_count(&self) -> usize {
        self.transcripts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl TranscriptSink for RecordingTranscriptSink {
    async fn persist(&self, transcript: &Transcript) -> Result<(), CollaboratorError> {
        {
            let mut failures = self.failures.lock().unwrap_or_else(PoisonError::into_inner);
            if *failures > 0 {
                *failures -= 1;
                return Err(CollaboratorError::Io(std::io::Error::other(
                    "scripted transcript failure",
                )));
            }
        }

        self.transcripts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(transcript.clone());
        Ok(())
    }
}
