//! Interview controller
//!
//! Drives a session from start through the answer loop to its final
//! summary. Every round is computed on a staged copy of the session and
//! written back only once all collaborator calls for that round succeeded,
//! so a failed request never leaves a half-applied round behind.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::collaborators::{
    AnswerEvaluator, Evaluation, EvaluationRequest, QuestionGenerator, QuestionRequest,
    TranscriptSink,
};
use crate::domain::Domain;
use crate::error::{CollaboratorError, InterviewError};
use crate::scoring::Verdict;

use super::state::{FinalSummary, Session, SessionDraft, SessionSnapshot};
use super::store::SessionStore;

/// Default deadline for a single collaborator call
pub const DEFAULT_COLLABORATOR_TIMEOUT: Duration = Duration::from_secs(30);

/// Tunables for [`InterviewController`]
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Deadline applied to every generator, evaluator and transcript call
    pub collaborator_timeout: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            collaborator_timeout: DEFAULT_COLLABORATOR_TIMEOUT,
        }
    }
}

/// The three external collaborators an interview needs
#[derive(Clone)]
pub struct Collaborators {
    pub generator: Arc<dyn QuestionGenerator>,
    pub evaluator: Arc<dyn AnswerEvaluator>,
    pub transcripts: Arc<dyn TranscriptSink>,
}

/// Result of starting an interview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartedSession {
    pub session_id: String,
    pub question: String,
    pub question_number: u32,
}

/// Feedback for an answered question plus the next one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextQuestion {
    pub score: f64,
    pub explanation: String,
    pub verdict: Verdict,
    pub next_question: String,
    pub question_number: u32,
}

/// What happened after an answer was submitted
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerOutcome {
    /// The interview goes on with another question
    Continue(NextQuestion),
    /// The round limit was reached
    Finished(FinalSummary),
}

impl AnswerOutcome {
    pub fn is_finished(&self) -> bool {
        matches!(self, AnswerOutcome::Finished(_))
    }
}

/// Orchestrates interview sessions
///
/// Holds the session store and collaborators; all session mutation goes
/// through here.
pub struct InterviewController {
    store: Arc<dyn SessionStore>,
    collaborators: Collaborators,
    config: ControllerConfig,
}

impl InterviewController {
    pub fn new(
        store: Arc<dyn SessionStore>,
        collaborators: Collaborators,
        config: ControllerConfig,
    ) -> Self {
        Self {
            store,
            collaborators,
            config,
        }
    }

    /// Number of sessions known to the store
    pub async fn session_count(&self) -> usize {
        self.store.session_count().await
    }

    /// Start an interview and return its first question
    ///
    /// The session is registered only after the first question was
    /// generated, so a failed start leaves nothing behind.
    pub async fn start_session(
        &self,
        name: &str,
        email: &str,
        domain: &str,
    ) -> Result<StartedSession, InterviewError> {
        let domain = Domain::parse(domain)?;
        if name.trim().is_empty() {
            return Err(InterviewError::InvalidRequest("name is required".to_string()));
        }
        if email.trim().is_empty() {
            return Err(InterviewError::InvalidRequest("email is required".to_string()));
        }

        let first_question = self.generate(QuestionRequest::opening(domain)).await?;
        let question = first_question.question.clone();

        let session_id = self
            .store
            .create(SessionDraft {
                name: name.to_string(),
                email: email.to_string(),
                domain,
                first_question,
            })
            .await;

        info!(session_id = %session_id, %domain, "Interview started");

        Ok(StartedSession {
            session_id,
            question,
            question_number: 1,
        })
    }

    /// Grade an answer and either continue or finish the interview
    ///
    /// Finished sessions report [`InterviewError::SessionNotFound`], exactly
    /// like unknown ids.
    pub async fn submit_answer(
        &self,
        session_id: &str,
        answer: &str,
    ) -> Result<AnswerOutcome, InterviewError> {
        let handle = self.store.get(session_id).await.inspect_err(|_| {
            debug!(session_id, "Answer for unknown session");
        })?;
        let mut session = handle.lock().await;
        if session.is_finished() {
            debug!(session_id, "Answer for finished session");
            return Err(InterviewError::SessionNotFound(session_id.to_string()));
        }

        let pending = session.pending().cloned().ok_or_else(|| {
            InterviewError::InvariantViolation(format!(
                "session {} has no pending question",
                session_id
            ))
        })?;

        let evaluation = self
            .evaluate(EvaluationRequest {
                answer: answer.to_string(),
                reference_answer: pending.reference_answer,
                question: pending.question,
            })
            .await?;
        let score = evaluation.score;
        let explanation = evaluation.explanation.clone();

        let mut staged = session.clone();
        let verdict = staged.record_round(answer, evaluation)?;
        debug!(
            session_id,
            score,
            ?verdict,
            difficulty = %staged.difficulty(),
            "Answer graded"
        );

        if staged.reached_round_limit() {
            let summary = self.finalize(&mut staged).await?;
            *session = staged;
            info!(
                session_id,
                final_score_percent = summary.score_summary.final_score_percent,
                "Interview finished"
            );
            return Ok(AnswerOutcome::Finished(summary));
        }

        let request = staged.begin_next_round();
        let next = self.generate(request).await?;
        let next_question = next.question.clone();
        staged.set_pending(next);
        staged.check_invariants()?;

        let question_number = staged.num_asked();
        *session = staged;

        Ok(AnswerOutcome::Continue(NextQuestion {
            score,
            explanation,
            verdict,
            next_question,
            question_number,
        }))
    }

    /// End an interview early
    ///
    /// Also accepted for finished sessions, which re-persist their
    /// transcript and return the same summary again.
    pub async fn exit_session(&self, session_id: &str) -> Result<FinalSummary, InterviewError> {
        let handle = self.store.get(session_id).await?;
        let mut session = handle.lock().await;

        let mut staged = session.clone();
        let summary = self.finalize(&mut staged).await?;
        *session = staged;

        info!(
            session_id,
            asked = summary.score_summary.asked,
            final_score_percent = summary.score_summary.final_score_percent,
            "Interview exited"
        );
        Ok(summary)
    }

    /// Read-only view of a session, finished or not
    pub async fn session_status(&self, session_id: &str) -> Result<SessionSnapshot, InterviewError> {
        let handle = self.store.get(session_id).await?;
        let session = handle.lock().await;
        Ok(session.snapshot())
    }

    /// Mark finished, persist the transcript and build the summary
    async fn finalize(&self, staged: &mut Session) -> Result<FinalSummary, InterviewError> {
        staged.finish(Utc::now());
        staged.check_invariants()?;

        let transcript = staged.transcript();
        self.bounded(self.collaborators.transcripts.persist(&transcript))
            .await
            .map_err(|e| {
                warn!(session_id = staged.id(), error = %e, "Transcript persistence failed");
                InterviewError::Persistence(e)
            })?;

        Ok(staged.final_summary())
    }

    async fn generate(
        &self,
        request: QuestionRequest,
    ) -> Result<crate::collaborators::GeneratedQuestion, InterviewError> {
        self.bounded(self.collaborators.generator.generate(request))
            .await
            .map_err(|e| {
                warn!(domain = %request.domain, error = %e, "Question generation failed");
                InterviewError::QuestionGeneration(e)
            })
    }

    async fn evaluate(&self, request: EvaluationRequest) -> Result<Evaluation, InterviewError> {
        let evaluation = self
            .bounded(self.collaborators.evaluator.evaluate(request))
            .await
            .map_err(|e| {
                warn!(error = %e, "Answer evaluation failed");
                InterviewError::Evaluation(e)
            })?;

        if !evaluation.score.is_finite() {
            return Err(InterviewError::Evaluation(CollaboratorError::InvalidResponse(
                format!("score {} is not a finite number", evaluation.score),
            )));
        }
        if !(0.0..=1.0).contains(&evaluation.score) {
            warn!(score = evaluation.score, "Evaluator score outside 0..=1");
        }
        Ok(evaluation)
    }

    /// Run a collaborator call under the configured deadline
    async fn bounded<T, F>(&self, call: F) -> Result<T, CollaboratorError>
    where
        F: Future<Output = Result<T, CollaboratorError>>,
    {
        let limit = self.config.collaborator_timeout;
        match tokio::time::timeout(limit, call).await {
            Ok(result) => result,
            Err(_) => Err(CollaboratorError::Timeout(limit)),
        }
    }
}
