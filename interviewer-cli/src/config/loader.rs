use super::types::{
    CollaboratorsConfig, DEFAULT_COLLABORATOR_TIMEOUT_SECS, DEFAULT_HOST, DEFAULT_PORT,
    InterviewConfig, InterviewerConfig, RawCollaboratorsConfig, RawInterviewConfig,
    RawInterviewerConfig, RawServerConfig, RawTranscriptsConfig, ServerConfig, TranscriptsConfig,
};
use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project)
    pub fn load() -> Result<InterviewerConfig> {
        let mut raw = RawInterviewerConfig::default();

        // Layer 1: User config
        let user_path = Self::user_config_path();
        if user_path.exists() {
            raw = Self::merge_raw(raw, Self::read_raw(&user_path)?);
        }

        // Layer 2: Project config
        let project_path = Self::project_config_path();
        if project_path.exists() {
            raw = Self::merge_raw(raw, Self::read_raw(&project_path)?);
        }

        Self::finalize(raw)
    }

    /// Get user config path
    pub fn user_config_path() -> PathBuf {
        interviewer_paths::config_dir().join("config.toml")
    }

    /// Get project config path
    /// Can be overridden with INTERVIEWER_PROJECT_CONFIG_DIR env var
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("INTERVIEWER_PROJECT_CONFIG_DIR") {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".interviewer/config.toml")
        }
    }

    fn read_raw(path: &Path) -> Result<RawInterviewerConfig> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("invalid config in {}", path.display()))
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawInterviewerConfig, overlay: RawInterviewerConfig) -> RawInterviewerConfig {
        RawInterviewerConfig {
            server: RawServerConfig {
                host: overlay.server.host.or(base.server.host),
                port: overlay.server.port.or(base.server.port),
            },
            interview: RawInterviewConfig {
                collaborator_timeout_secs: overlay
                    .interview
                    .collaborator_timeout_secs
                    .or(base.interview.collaborator_timeout_secs),
            },
            collaborators: RawCollaboratorsConfig {
                backend: overlay.collaborators.backend.or(base.collaborators.backend),
                ollama_host: overlay
                    .collaborators
                    .ollama_host
                    .or(base.collaborators.ollama_host),
                ollama_model: overlay
                    .collaborators
                    .ollama_model
                    .or(base.collaborators.ollama_model),
                ollama_temperature: overlay
                    .collaborators
                    .ollama_temperature
                    .or(base.collaborators.ollama_temperature),
            },
            transcripts: RawTranscriptsConfig {
                dir: overlay.transcripts.dir.or(base.transcripts.dir),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawInterviewerConfig) -> Result<InterviewerConfig> {
        if raw.interview.collaborator_timeout_secs == Some(0) {
            bail!("interview.collaborator_timeout_secs must be at least 1");
        }

        let collaborator_defaults = CollaboratorsConfig::default();
        Ok(InterviewerConfig {
            server: ServerConfig {
                host: raw.server.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: raw.server.port.unwrap_or(DEFAULT_PORT),
            },
            interview: InterviewConfig {
                collaborator_timeout_secs: raw
                    .interview
                    .collaborator_timeout_secs
                    .unwrap_or(DEFAULT_COLLABORATOR_TIMEOUT_SECS),
            },
            collaborators: CollaboratorsConfig {
                backend: raw
                    .collaborators
                    .backend
                    .unwrap_or(collaborator_defaults.backend),
                ollama_host: raw
                    .collaborators
                    .ollama_host
                    .unwrap_or(collaborator_defaults.ollama_host),
                ollama_model: raw
                    .collaborators
                    .ollama_model
                    .unwrap_or(collaborator_defaults.ollama_model),
                ollama_temperature: raw.collaborators.ollama_temperature,
            },
            transcripts: TranscriptsConfig {
                dir: raw
                    .transcripts
                    .dir
                    .unwrap_or_else(interviewer_paths::transcripts_dir),
            },
        })
    }

    /// Load config from a specific path (for testing)
    #[cfg(test)]
    pub fn load_from_path(path: &Path) -> Result<InterviewerConfig> {
        if path.exists() {
            Self::finalize(Self::read_raw(path)?)
        } else {
            Ok(InterviewerConfig::default())
        }
    }
}
