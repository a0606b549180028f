//! interviewer-core: Core library for adaptive interviews
//!
//! This crate provides the interview state machine and everything it needs
//! to run:
//!
//! - **Session management** - [`InterviewController`] drives sessions held in a
//!   [`SessionStore`] through start, answer and exit
//! - **Scoring policy** - [`scoring::apply`] turns evaluator scores into verdicts
//!   and difficulty changes
//! - **Collaborators** - [`QuestionGenerator`], [`AnswerEvaluator`] and
//!   [`TranscriptSink`] traits, with offline implementations in [`bank`],
//!   [`evaluator`] and [`transcript`]
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use interviewer_core::{
//!     Collaborators, ControllerConfig, InterviewController, JsonTranscriptStore,
//!     KeywordEvaluator, MemorySessionStore, QuestionBank,
//! };
//!
//! async fn example() -> Result<(), interviewer_core::InterviewError> {
//!     let controller = InterviewController::new(
//!         Arc::new(MemorySessionStore::new()),
//!         Collaborators {
//!             generator: Arc::new(QuestionBank::new()),
//!             evaluator: Arc::new(KeywordEvaluator::new()),
//!             transcripts: Arc::new(JsonTranscriptStore::default_location()),
//!         },
//!         ControllerConfig::default(),
//!     );
//!
//!     let started = controller
//!         .start_session("Ada", "ada@example.com", "finance")
//!         .await?;
//!     println!("Q{}: {}", started.question_number, started.question);
//!
//!     let outcome = controller
//!         .submit_answer(&started.session_id, "Income statement, balance sheet, cash flow")
//!         .await?;
//!     println!("finished: {}", outcome.is_finished());
//!     Ok(())
//! }
//! ```

pub mod bank;
pub mod collaborators;
pub mod domain;
pub mod error;
pub mod evaluator;
pub mod scoring;
pub mod session;
pub mod transcript;

// Re-export key types for convenience
pub use bank::QuestionBank;
pub use collaborators::{
    AnswerEvaluator, Evaluation, EvaluationRequest, GeneratedQuestion, QuestionGenerator,
    QuestionRequest, TranscriptSink,
};
pub use domain::Domain;
pub use error::{CollaboratorError, InterviewError};
pub use evaluator::KeywordEvaluator;
pub use scoring::{Difficulty, Verdict};
pub use session::{
    AnswerOutcome, Collaborators, ControllerConfig, FinalSummary, InterviewController,
    MAX_ROUNDS, MemorySessionStore, NextQuestion, Round, ScoreSummary, SessionSnapshot,
    SessionStore, StartedSession,
};
pub use transcript::{JsonTranscriptStore, Transcript};
