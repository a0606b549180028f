pub mod config;
pub mod practice;
pub mod serve;

use std::sync::Arc;
use std::time::Duration;

use interviewer_core::{
    Collaborators, ControllerConfig, JsonTranscriptStore, KeywordEvaluator, QuestionBank,
};
use interviewer_models::{OllamaAnswerEvaluator, OllamaClient, OllamaQuestionGenerator};
use tracing::info;

use crate::config::{Backend, InterviewerConfig};

/// Build the collaborators selected by the configuration
pub fn build_collaborators(config: &InterviewerConfig) -> Collaborators {
    let transcripts = Arc::new(JsonTranscriptStore::new(config.transcripts.dir.clone()));
    info!(dir = %transcripts.dir().display(), "Writing transcripts");

    match config.collaborators.backend {
        Backend::Builtin => {
            info!("Using built-in question bank and keyword grading");
            Collaborators {
                generator: Arc::new(QuestionBank::new()),
                evaluator: Arc::new(KeywordEvaluator::new()),
                transcripts,
            }
        }
        Backend::Ollama => {
            let mut client = OllamaClient::with_base_url(
                &config.collaborators.ollama_host,
                &config.collaborators.ollama_model,
            );
            if let Some(temperature) = config.collaborators.ollama_temperature {
                client = client.with_temperature(temperature);
            }
            info!(
                host = client.base_url(),
                model = client.model(),
                "Using Ollama collaborators"
            );
            Collaborators {
                generator: Arc::new(OllamaQuestionGenerator::new(client.clone())),
                evaluator: Arc::new(OllamaAnswerEvaluator::new(client)),
                transcripts,
            }
        }
    }
}

/// Controller tunables from the configuration
pub fn controller_config(config: &InterviewerConfig) -> ControllerConfig {
    ControllerConfig {
        collaborator_timeout: Duration::from_secs(config.interview.collaborator_timeout_secs),
    }
}
