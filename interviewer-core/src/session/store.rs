//! Session storage
//!
//! Each session sits behind its own mutex so a request holds exactly one
//! session for its whole duration, while the map lock is only taken long
//! enough to look up or insert a handle.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::error::InterviewError;

use super::state::{Session, SessionDraft};

/// Shared, individually locked session
pub type SessionHandle = Arc<Mutex<Session>>;

/// Keyed registry of sessions
///
/// There is no removal: sessions live until the process exits.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Register a new session and return its id
    async fn create(&self, draft: SessionDraft) -> String;

    /// Look up a session by id
    async fn get(&self, id: &str) -> Result<SessionHandle, InterviewError>;

    /// Number of sessions held, finished ones included
    async fn session_count(&self) -> usize;
}

/// In-memory [`SessionStore`]
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, SessionHandle>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, draft: SessionDraft) -> String {
        let id = Uuid::new_v4().to_string();
        let session = Session::open(id.clone(), draft);

        self.sessions
            .write()
            .await
            .insert(id.clone(), Arc::new(Mutex::new(session)));
        id
    }

    async fn get(&self, id: &str) -> Result<SessionHandle, InterviewError> {
        self.sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| InterviewError::SessionNotFound(id.to_string()))
    }

    async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
