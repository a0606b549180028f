//! Interview transcripts and the JSON file sink

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collaborators::TranscriptSink;
use crate::domain::Domain;
use crate::error::CollaboratorError;
use crate::session::state::{Round, final_score_percent};

/// Record of a finished (or exited) interview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub session_id: String,
    pub name: String,
    pub email: String,
    pub domain: Domain,
    pub history: Vec<Round>,
    pub num_asked: u32,
    pub num_correct: u32,
    pub num_wrong: u32,
    pub finished_at: DateTime<Utc>,
}

impl Transcript {
    pub fn final_score_percent(&self) -> f64 {
        final_score_percent(self.num_correct, self.num_asked)
    }
}

/// On-disk layout: the transcript plus its computed score
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptFile {
    #[serde(flatten)]
    pub transcript: Transcript,
    pub final_score_percent: f64,
}

/// Writes each transcript to its own pretty-printed JSON file
pub struct JsonTranscriptStore {
    dir: PathBuf,
}

impl JsonTranscriptStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under the default data directory
    pub fn default_location() -> Self {
        Self::new(interviewer_paths::transcripts_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File a transcript is written to, unique per session
    pub fn path_for(&self, transcript: &Transcript) -> PathBuf {
        let stamp = transcript.finished_at.format("%Y%m%dT%H%M%S%.3f");
        self.dir.join(format!(
            "{}_{}_{}.json",
            stamp,
            sanitize(&transcript.email),
            sanitize(&transcript.session_id)
        ))
    }
}

#[async_trait]
impl TranscriptSink for JsonTranscriptStore {
    async fn persist(&self, transcript: &Transcript) -> Result<(), CollaboratorError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let file = TranscriptFile {
            transcript: transcript.clone(),
            final_score_percent: transcript.final_score_percent(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        let path = self.path_for(transcript);
        tokio::fs::write(&path, json).await?;

        debug!(path = %path.display(), "Transcript written");
        Ok(())
    }
}

/// Keep only characters that are safe in file names
fn sanitize(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | '@') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "anonymous".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn transcript() -> Transcript {
        Transcript {
            session_id: "s-1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            domain: Domain::Finance,
            history: vec![Round {
                question: "What is NPV?".to_string(),
                user_answer: "discounted cash flows".to_string(),
                correct_answer: "Present value of future cash flows".to_string(),
                score: 0.8,
                explanation: "close".to_string(),
            }],
            num_asked: 2,
            num_correct: 1,
            num_wrong: 0,
            finished_at: Utc::now(),
        }
    }

    #[test]
    fn sanitize_replaces_unsafe_characters() {
        assert_eq!(sanitize("ada@example.com"), "ada@example.com");
        assert_eq!(sanitize("../etc/passwd"), ".._etc_passwd");
        assert_eq!(sanitize("a b/c"), "a_b_c");
        assert_eq!(sanitize("   "), "anonymous");
    }

    #[test]
    fn transcript_computes_final_score() {
        assert_eq!(transcript().final_score_percent(), 50.0);
    }

    #[tokio::test]
    async fn persist_writes_json_file() {
        let temp = TempDir::new().unwrap();
        let store = JsonTranscriptStore::new(temp.path().join("transcripts"));
        let transcript = transcript();

        store.persist(&transcript).await.unwrap();

        let contents = std::fs::read_to_string(store.path_for(&transcript)).unwrap();
        let file: TranscriptFile = serde_json::from_str(&contents).unwrap();
        assert_eq!(file.transcript, transcript);
        assert_eq!(file.final_score_percent, 50.0);
        assert!(contents.contains("\"user_answer\""));
        assert!(contents.contains("\"domain\": \"finance\""));
    }

    #[tokio::test]
    async fn sessions_finishing_together_get_separate_files() {
        let temp = TempDir::new().unwrap();
        let store = JsonTranscriptStore::new(temp.path());
        let first = Transcript {
            session_id: "session-a".to_string(),
            ..transcript()
        };
        let second = Transcript {
            session_id: "session-b".to_string(),
            finished_at: first.finished_at,
            ..transcript()
        };

        store.persist(&first).await.unwrap();
        store.persist(&second).await.unwrap();

        assert_ne!(store.path_for(&first), store.path_for(&second));
        let files = std::fs::read_dir(temp.path()).unwrap().count();
        assert_eq!(files, 2);

        let contents = std::fs::read_to_string(store.path_for(&first)).unwrap();
        let file: TranscriptFile = serde_json::from_str(&contents).unwrap();
        assert_eq!(file.transcript.session_id, "session-a");
    }

    #[test]
    fn file_name_carries_email_and_session() {
        let store = JsonTranscriptStore::new("/data");
        let path = store.path_for(&transcript());
        let name = path.file_name().unwrap().to_string_lossy().into_owned();

        assert!(name.ends_with("_ada@example.com_s-1.json"), "{name}");
        assert!(path.starts_with("/data"));
    }

    #[tokio::test]
    async fn persist_fails_when_directory_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocked");
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = JsonTranscriptStore::new(&blocker);

        let result = store.persist(&transcript()).await;

        assert!(matches!(result, Err(CollaboratorError::Io(_))));
    }
}
