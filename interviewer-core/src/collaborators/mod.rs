//! Collaborator traits consumed by the interview controller
//!
//! The controller never generates questions, grades answers or writes
//! transcripts itself. It calls out through these traits, which lets the
//! built-in implementations, the Ollama-backed ones and the scripted test
//! doubles in [`mock`] be swapped freely.

pub mod mock;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::Domain;
use crate::error::CollaboratorError;
use crate::scoring::Difficulty;
use crate::transcript::Transcript;

/// Inputs for generating the next question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub domain: Domain,
    pub difficulty: Difficulty,
    pub num_asked: u32,
    pub num_correct: u32,
    pub num_wrong: u32,
}

impl QuestionRequest {
    /// Request for the opening question of a fresh session
    pub fn opening(domain: Domain) -> Self {
        Self {
            domain,
            difficulty: Difficulty::START,
            num_asked: 0,
            num_correct: 0,
            num_wrong: 0,
        }
    }
}

/// A question together with the reference answer used for grading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQuestion {
    pub question: String,
    pub reference_answer: String,
}

/// Inputs for grading one answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationRequest {
    pub answer: String,
    pub reference_answer: String,
    pub question: String,
}

/// Grade produced by an evaluator
///
/// `score` is nominally in `[0, 1]` but is not clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub score: f64,
    pub explanation: String,
}

/// Produces interview questions
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, request: QuestionRequest) -> Result<GeneratedQuestion, CollaboratorError>;
}

/// Grades a candidate answer against the reference answer
#[async_trait]
pub trait AnswerEvaluator: Send + Sync {
    async fn evaluate(&self, request: EvaluationRequest) -> Result<Evaluation, CollaboratorError>;
}

/// Persists the transcript of a finished interview
///
/// Must complete (or fail) before the finishing request returns.
#[async_trait]
pub trait TranscriptSink: Send + Sync {
    async fn persist(&self, transcript: &Transcript) -> Result<(), CollaboratorError>;
}
