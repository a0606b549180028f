//! Session record and its round transitions
//!
//! A [`Session`] is the authoritative state of one interview. Only the
//! controller mutates it, and always through the transitions defined here,
//! so the counter and difficulty invariants live in one place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collaborators::{Evaluation, GeneratedQuestion, QuestionRequest};
use crate::domain::Domain;
use crate::error::InterviewError;
use crate::scoring::{self, Difficulty, Verdict};
use crate::transcript::Transcript;

/// Number of questions after which an interview finishes on its own
pub const MAX_ROUNDS: u32 = 10;

/// One answered question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub score: f64,
    pub explanation: String,
}

/// Counters reported when an interview finishes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub asked: u32,
    pub correct: u32,
    pub wrong: u32,
    pub final_score_percent: f64,
}

impl ScoreSummary {
    pub fn new(asked: u32, correct: u32, wrong: u32) -> Self {
        Self {
            asked,
            correct,
            wrong,
            final_score_percent: final_score_percent(correct, asked),
        }
    }
}

/// `100 * correct / asked` rounded to two decimals, or 0 when nothing was asked
pub fn final_score_percent(correct: u32, asked: u32) -> f64 {
    if asked == 0 {
        return 0.0;
    }
    let percent = 100.0 * correct as f64 / asked as f64;
    (percent * 100.0).round() / 100.0
}

/// Summary and full history of a finished interview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalSummary {
    pub score_summary: ScoreSummary,
    pub history: Vec<Round>,
}

/// Everything needed to open a session
#[derive(Debug, Clone)]
pub struct SessionDraft {
    pub name: String,
    pub email: String,
    pub domain: Domain,
    pub first_question: GeneratedQuestion,
}

/// Read-only view of a session, safe to hand to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: String,
    pub name: String,
    pub domain: Domain,
    pub difficulty: Difficulty,
    pub num_asked: u32,
    pub num_correct: u32,
    pub num_wrong: u32,
    pub answered: usize,
    pub finished: bool,
    pub current_question: Option<String>,
    pub created_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

/// One candidate's interview
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    id: String,
    name: String,
    email: String,
    domain: Domain,
    difficulty: Difficulty,
    num_asked: u32,
    num_correct: u32,
    num_wrong: u32,
    pending: Option<GeneratedQuestion>,
    history: Vec<Round>,
    finished: bool,
    created_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Open a session with its first question already attached
    pub fn open(id: impl Into<String>, draft: SessionDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            email: draft.email,
            domain: draft.domain,
            difficulty: Difficulty::START,
            num_asked: 1,
            num_correct: 0,
            num_wrong: 0,
            pending: Some(draft.first_question),
            history: Vec::new(),
            finished: false,
            created_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn num_asked(&self) -> u32 {
        self.num_asked
    }

    pub fn num_correct(&self) -> u32 {
        self.num_correct
    }

    pub fn num_wrong(&self) -> u32 {
        self.num_wrong
    }

    pub fn history(&self) -> &[Round] {
        &self.history
    }

    /// The question awaiting an answer, if any
    pub fn pending(&self) -> Option<&GeneratedQuestion> {
        self.pending.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Record an answered question and apply the scoring policy
    ///
    /// Consumes the pending question. The caller decides afterwards whether
    /// the interview finishes or moves on via [`Session::begin_next_round`].
    pub fn record_round(
        &mut self,
        answer: &str,
        evaluation: Evaluation,
    ) -> Result<Verdict, InterviewError> {
        if self.finished {
            return Err(InterviewError::InvariantViolation(format!(
                "round recorded on finished session {}",
                self.id
            )));
        }
        let pending = self.pending.take().ok_or_else(|| {
            InterviewError::InvariantViolation(format!("session {} has no pending question", self.id))
        })?;

        self.history.push(Round {
            question: pending.question,
            user_answer: answer.to_string(),
            correct_answer: pending.reference_answer,
            score: evaluation.score,
            explanation: evaluation.explanation,
        });

        let outcome = scoring::apply(evaluation.score, self.difficulty);
        self.difficulty = outcome.difficulty;
        match outcome.verdict {
            Verdict::Correct => self.num_correct += 1,
            Verdict::Wrong => self.num_wrong += 1,
            Verdict::Neutral => {}
        }
        Ok(outcome.verdict)
    }

    /// Whether the round limit has been reached
    pub fn reached_round_limit(&self) -> bool {
        self.num_asked >= MAX_ROUNDS
    }

    /// Count the next question as asked and describe what to generate
    pub fn begin_next_round(&mut self) -> QuestionRequest {
        self.num_asked += 1;
        self.question_request()
    }

    /// Attach the question the candidate should answer next
    pub fn set_pending(&mut self, question: GeneratedQuestion) {
        self.pending = Some(question);
    }

    /// Generation inputs reflecting the current counters
    pub fn question_request(&self) -> QuestionRequest {
        QuestionRequest {
            domain: self.domain,
            difficulty: self.difficulty,
            num_asked: self.num_asked,
            num_correct: self.num_correct,
            num_wrong: self.num_wrong,
        }
    }

    /// Mark the interview finished
    ///
    /// Finishing twice keeps the first finish time.
    pub fn finish(&mut self, at: DateTime<Utc>) {
        self.finished = true;
        self.pending = None;
        self.finished_at.get_or_insert(at);
    }

    pub fn score_summary(&self) -> ScoreSummary {
        ScoreSummary::new(self.num_asked, self.num_correct, self.num_wrong)
    }

    pub fn final_summary(&self) -> FinalSummary {
        FinalSummary {
            score_summary: self.score_summary(),
            history: self.history.clone(),
        }
    }

    /// Transcript of the interview as it stands
    pub fn transcript(&self) -> Transcript {
        Transcript {
            session_id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            domain: self.domain,
            history: self.history.clone(),
            num_asked: self.num_asked,
            num_correct: self.num_correct,
            num_wrong: self.num_wrong,
            finished_at: self.finished_at.unwrap_or_else(Utc::now),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id.clone(),
            name: self.name.clone(),
            domain: self.domain,
            difficulty: self.difficulty,
            num_asked: self.num_asked,
            num_correct: self.num_correct,
            num_wrong: self.num_wrong,
            answered: self.history.len(),
            finished: self.finished,
            current_question: self.pending.as_ref().map(|p| p.question.clone()),
            created_at: self.created_at,
            finished_at: self.finished_at,
        }
    }

    /// Verify the counter invariants
    ///
    /// A finished session may have dropped its pending question, so its
    /// asked count is allowed to exceed the history by one.
    pub fn check_invariants(&self) -> Result<(), InterviewError> {
        let answered = self.history.len() as u32;
        let pending = u32::from(self.pending.is_some());

        let asked_matches = if self.finished {
            self.num_asked == answered || self.num_asked == answered + 1
        } else {
            self.num_asked == answered + pending
        };
        if !asked_matches {
            return Err(InterviewError::InvariantViolation(format!(
                "session {}: asked {} but {} answered and {} pending",
                self.id, self.num_asked, answered, pending
            )));
        }

        if self.num_correct + self.num_wrong > self.num_asked {
            return Err(InterviewError::InvariantViolation(format!(
                "session {}: {} correct + {} wrong exceeds {} asked",
                self.id, self.num_correct, self.num_wrong, self.num_asked
            )));
        }

        if self.finished && self.pending.is_some() {
            return Err(InterviewError::InvariantViolation(format!(
                "session {} is finished but still has a pending question",
                self.id
            )));
        }

        Ok(())
    }
}
