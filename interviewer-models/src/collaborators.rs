//! Ollama-backed interview collaborators

use async_trait::async_trait;
use interviewer_core::{
    AnswerEvaluator, CollaboratorError, Evaluation, EvaluationRequest, GeneratedQuestion,
    QuestionGenerator, QuestionRequest,
};
use tracing::debug;

use crate::error::Error;
use crate::ollama::OllamaClient;
use crate::prompts::{GradeReply, QuestionReply, grading_messages, parse_reply, question_messages};

/// Generates questions by prompting an Ollama model
pub struct OllamaQuestionGenerator {
    client: OllamaClient,
}

impl OllamaQuestionGenerator {
    pub fn new(client: OllamaClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QuestionGenerator for OllamaQuestionGenerator {
    async fn generate(&self, request: QuestionRequest) -> Result<GeneratedQuestion, CollaboratorError> {
        let reply = self.client.chat(question_messages(&request)).await?;
        let parsed: QuestionReply = parse_reply(&reply)?;

        if parsed.question.trim().is_empty() {
            return Err(Error::InvalidReply("model returned an empty question".to_string()).into());
        }

        debug!(domain = %request.domain, difficulty = %request.difficulty, "Question generated");
        Ok(GeneratedQuestion {
            question: parsed.question.trim().to_string(),
            reference_answer: parsed.answer.trim().to_string(),
        })
    }
}

/// Grades answers by prompting an Ollama model
pub struct OllamaAnswerEvaluator {
    client: OllamaClient,
}

impl OllamaAnswerEvaluator {
    pub fn new(client: OllamaClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AnswerEvaluator for OllamaAnswerEvaluator {
    async fn evaluate(&self, request: EvaluationRequest) -> Result<Evaluation, CollaboratorError> {
        let reply = self.client.chat(grading_messages(&request)).await?;
        let parsed: GradeReply = parse_reply(&reply)?;

        Ok(Evaluation {
            score: parsed.score,
            explanation: parsed.explanation,
        })
    }
}
