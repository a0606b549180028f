use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawInterviewerConfig {
    #[serde(default)]
    pub server: RawServerConfig,

    #[serde(default)]
    pub interview: RawInterviewConfig,

    #[serde(default)]
    pub collaborators: RawCollaboratorsConfig,

    #[serde(default)]
    pub transcripts: RawTranscriptsConfig,
}

/// Server config as stored in TOML (optional fields for proper merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawServerConfig {
    /// Host for the interviewer server
    pub host: Option<String>,

    /// Port for the interviewer server
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawInterviewConfig {
    /// Deadline for each generator, evaluator and transcript call
    pub collaborator_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawCollaboratorsConfig {
    pub backend: Option<Backend>,
    pub ollama_host: Option<String>,
    pub ollama_model: Option<String>,
    pub ollama_temperature: Option<f32>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawTranscriptsConfig {
    /// Directory finished transcripts are written to
    pub dir: Option<PathBuf>,
}

/// Where questions and grades come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Built-in question bank and keyword grading, no network
    #[default]
    Builtin,
    /// A local Ollama model
    Ollama,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewerConfig {
    pub server: ServerConfig,
    pub interview: InterviewConfig,
    pub collaborators: CollaboratorsConfig,
    pub transcripts: TranscriptsConfig,
}

impl Default for InterviewerConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            interview: InterviewConfig::default(),
            collaborators: CollaboratorsConfig::default(),
            transcripts: TranscriptsConfig {
                dir: interviewer_paths::transcripts_dir(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewConfig {
    pub collaborator_timeout_secs: u64,
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            collaborator_timeout_secs: DEFAULT_COLLABORATOR_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollaboratorsConfig {
    pub backend: Backend,
    pub ollama_host: String,
    pub ollama_model: String,
    /// Sampling temperature; the model's own default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ollama_temperature: Option<f32>,
}

impl Default for CollaboratorsConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Builtin,
            ollama_host: interviewer_models::DEFAULT_BASE_URL.to_string(),
            ollama_model: interviewer_models::DEFAULT_MODEL.to_string(),
            ollama_temperature: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptsConfig {
    pub dir: PathBuf,
}

/// Default host for the interviewer server
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port for the interviewer server
pub const DEFAULT_PORT: u16 = 7480;

pub const DEFAULT_COLLABORATOR_TIMEOUT_SECS: u64 = 30;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = InterviewerConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.interview.collaborator_timeout_secs, 30);
        assert_eq!(config.collaborators.backend, Backend::Builtin);
        assert_eq!(config.collaborators.ollama_model, "llama3.1");
        assert!(config.transcripts.dir.ends_with("interviewer/transcripts"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = InterviewerConfig {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            collaborators: CollaboratorsConfig {
                backend: Backend::Ollama,
                ..Default::default()
            },
            transcripts: TranscriptsConfig {
                dir: PathBuf::from("/tmp/transcripts"),
            },
            ..Default::default()
        };

        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("backend = \"ollama\""));

        let parsed: InterviewerConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.server.port, 8080);
        assert_eq!(parsed.collaborators.backend, Backend::Ollama);
        assert_eq!(parsed.transcripts.dir, PathBuf::from("/tmp/transcripts"));
    }

    #[test]
    fn test_raw_config_partial_parsing() {
        let toml_str = r#"
[server]
port = 9000

[collaborators]
backend = "ollama"
"#;
        let raw: RawInterviewerConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(raw.server.port, Some(9000));
        assert!(raw.server.host.is_none());
        assert_eq!(raw.collaborators.backend, Some(Backend::Ollama));
        assert!(raw.collaborators.ollama_model.is_none());
        assert!(raw.interview.collaborator_timeout_secs.is_none());
    }

    #[test]
    fn test_raw_config_empty_uses_none() {
        let raw: RawInterviewerConfig = toml::from_str("").unwrap();

        assert!(raw.server.port.is_none());
        assert!(raw.collaborators.backend.is_none());
        assert!(raw.transcripts.dir.is_none());
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let result: Result<RawInterviewerConfig, _> =
            toml::from_str("[collaborators]\nbackend = \"openai\"\n");
        assert!(result.is_err());
    }
}
