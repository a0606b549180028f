//! Interview request handlers

use std::sync::Arc;

use axum::{Json, extract::State};
use interviewer_core::{AnswerOutcome, FinalSummary, Round, ScoreSummary};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::ApiError;

/// Body of `POST /start`
#[derive(Debug, Serialize, Deserialize)]
pub struct StartRequest {
    pub name: String,
    pub email: String,
    pub domain: String,
}

/// First question of a new interview
#[derive(Debug, Serialize, Deserialize)]
pub struct StartResponse {
    pub session_id: String,
    pub question: String,
    pub question_number: u32,
}

/// Body of `POST /answer`
#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub session_id: String,
    pub answer: String,
}

/// Body of `POST /exit`
#[derive(Debug, Serialize, Deserialize)]
pub struct ExitRequest {
    pub session_id: String,
}

/// Graded answer with the next question
#[derive(Debug, Serialize, Deserialize)]
pub struct ContinueResponse {
    pub finished: bool,
    pub score: f64,
    pub explanation: String,
    pub next_question: String,
    pub question_number: u32,
}

/// Final summary of an interview
#[derive(Debug, Serialize, Deserialize)]
pub struct FinishedResponse {
    pub finished: bool,
    pub score_summary: ScoreSummary,
    pub history: Vec<Round>,
}

impl From<FinalSummary> for FinishedResponse {
    fn from(summary: FinalSummary) -> Self {
        Self {
            finished: true,
            score_summary: summary.score_summary,
            history: summary.history,
        }
    }
}

/// Outcome of `POST /answer`, told apart by the `finished` flag
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerResponse {
    Finished(FinishedResponse),
    Continue(ContinueResponse),
}

impl From<AnswerOutcome> for AnswerResponse {
    fn from(outcome: AnswerOutcome) -> Self {
        match outcome {
            AnswerOutcome::Continue(next) => AnswerResponse::Continue(ContinueResponse {
                finished: false,
                score: next.score,
                explanation: next.explanation,
                next_question: next.next_question,
                question_number: next.question_number,
            }),
            AnswerOutcome::Finished(summary) => AnswerResponse::Finished(summary.into()),
        }
    }
}

/// POST /start
pub async fn start(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StartRequest>,
) -> Result<Json<StartResponse>, ApiError> {
    let started = state
        .controller
        .start_session(&req.name, &req.email, &req.domain)
        .await?;

    Ok(Json(StartResponse {
        session_id: started.session_id,
        question: started.question,
        question_number: started.question_number,
    }))
}

/// POST /answer
pub async fn answer(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, ApiError> {
    let outcome = state
        .controller
        .submit_answer(&req.session_id, &req.answer)
        .await?;
    Ok(Json(outcome.into()))
}

/// POST /exit
pub async fn exit(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ExitRequest>,
) -> Result<Json<FinishedResponse>, ApiError> {
    let summary = state.controller.exit_session(&req.session_id).await?;
    Ok(Json(summary.into()))
}
