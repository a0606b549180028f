//! Prompt construction and reply parsing

use interviewer_core::{EvaluationRequest, QuestionRequest};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::ollama::OllamaChatMessage;

const INTERVIEWER_SYSTEM: &str = "You are a professional technical interviewer. \
Reply with a single JSON object and nothing else.";

/// Shape the model must return when asked for a question
#[derive(Debug, Deserialize)]
pub struct QuestionReply {
    pub question: String,
    pub answer: String,
}

/// Shape the model must return when asked to grade
#[derive(Debug, Deserialize)]
pub struct GradeReply {
    pub score: f64,
    pub explanation: String,
}

/// Messages asking for the next interview question
pub fn question_messages(request: &QuestionRequest) -> Vec<OllamaChatMessage> {
    let prompt = format!(
        "Write one interview question about {domain} at difficulty {difficulty} on a scale \
from 0 (entry level) to 10 (expert).\n\
So far the candidate was asked {asked} questions, answered {correct} correctly and \
{wrong} incorrectly.\n\
Return JSON of the form {{\"question\": \"...\", \"answer\": \"...\"}} where \"answer\" \
is a concise model answer used for grading.",
        domain = request.domain.label(),
        difficulty = request.difficulty,
        asked = request.num_asked,
        correct = request.num_correct,
        wrong = request.num_wrong,
    );
    vec![
        OllamaChatMessage::system(INTERVIEWER_SYSTEM),
        OllamaChatMessage::user(prompt),
    ]
}

/// Messages asking the model to grade an answer
pub fn grading_messages(request: &EvaluationRequest) -> Vec<OllamaChatMessage> {
    let prompt = format!(
        "Grade the candidate's answer against the reference answer.\n\n\
Question: {question}\n\
Reference answer: {reference}\n\
Candidate answer: {answer}\n\n\
Return JSON of the form {{\"score\": <number between 0 and 1>, \"explanation\": \"...\"}} \
where 1 means fully correct and 0 means wrong or missing.",
        question = request.question,
        reference = request.reference_answer,
        answer = request.answer,
    );
    vec![
        OllamaChatMessage::system(INTERVIEWER_SYSTEM),
        OllamaChatMessage::user(prompt),
    ]
}

/// Parse the first JSON object embedded in a model reply
///
/// Models sometimes wrap JSON in prose or code fences, so everything
/// outside the outermost braces is ignored.
pub fn parse_reply<T: DeserializeOwned>(reply: &str) -> Result<T> {
    let start = reply
        .find('{')
        .ok_or_else(|| Error::InvalidReply(format!("no JSON object in reply: {}", reply)))?;
    let end = reply
        .rfind('}')
        .filter(|end| *end > start)
        .ok_or_else(|| Error::InvalidReply(format!("unterminated JSON object: {}", reply)))?;

    serde_json::from_str(&reply[start..=end])
        .map_err(|e| Error::InvalidReply(format!("{}: {}", e, &reply[start..=end])))
}
