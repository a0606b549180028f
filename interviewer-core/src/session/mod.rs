//! Session management

pub mod controller;
pub mod state;
pub mod store;

// Re-export key types for convenience
pub use controller::{
    AnswerOutcome, Collaborators, ControllerConfig, InterviewController, NextQuestion,
    StartedSession,
};
pub use state::{
    FinalSummary, MAX_ROUNDS, Round, ScoreSummary, Session, SessionDraft, SessionSnapshot,
};
pub use store::{MemorySessionStore, SessionHandle, SessionStore};
