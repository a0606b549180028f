//! Shared application state for the interviewer server

use std::sync::Arc;

use chrono::{DateTime, Utc};
use interviewer_core::collaborators::mock::RecordingTranscriptSink;
use interviewer_core::{
    Collaborators, ControllerConfig, InterviewController, KeywordEvaluator, MemorySessionStore,
    QuestionBank,
};

/// Shared application state accessible by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Controller owning every interview session
    pub controller: Arc<InterviewController>,
    /// When the server started
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state around an existing controller
    pub fn new(controller: Arc<InterviewController>) -> Self {
        Self {
            controller,
            started_at: Utc::now(),
        }
    }

    /// Create state with an in-memory session store and the given collaborators
    pub fn with_collaborators(collaborators: Collaborators, config: ControllerConfig) -> Self {
        let controller = InterviewController::new(
            Arc::new(MemorySessionStore::new()),
            collaborators,
            config,
        );
        Self::new(Arc::new(controller))
    }

    /// Offline collaborators that keep transcripts in memory
    pub fn new_for_testing() -> Self {
        Self::with_collaborators(
            Collaborators {
                generator: Arc::new(QuestionBank::new()),
                evaluator: Arc::new(KeywordEvaluator::new()),
                transcripts: Arc::new(RecordingTranscriptSink::new()),
            },
            ControllerConfig::default(),
        )
    }

    /// Returns how long the server has been running
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}
