//! XDG Base Directory paths for interviewer.
//!
//! The server and CLI resolve their config file and transcript directory
//! through these helpers so both agree on where things live.

use std::path::PathBuf;

/// Get the interviewer config directory.
///
/// Returns `$XDG_CONFIG_HOME/interviewer` if set, otherwise `~/.config/interviewer`.
///
/// # Examples
///
/// ```
/// use interviewer_paths::config_dir;
///
/// let config_file = config_dir().join("config.toml");
/// ```
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join("interviewer")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".config/interviewer")
    } else {
        PathBuf::from(".config/interviewer")
    }
}

/// Get the interviewer data directory.
///
/// Returns `$XDG_DATA_HOME/interviewer` if set, otherwise `~/.local/share/interviewer`.
pub fn data_dir() -> PathBuf {
    if let Ok(xdg_data) = std::env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg_data).join("interviewer")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".local/share/interviewer")
    } else {
        PathBuf::from(".local/share/interviewer")
    }
}

/// Default directory for finished interview transcripts.
pub fn transcripts_dir() -> PathBuf {
    data_dir().join("transcripts")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_config_dir_ends_with_interviewer() {
        let path = config_dir();
        assert!(path.ends_with("interviewer"));
    }

    #[test]
    #[serial]
    fn test_transcripts_dir_is_under_data_dir() {
        assert_eq!(transcripts_dir(), data_dir().join("transcripts"));
    }

    #[test]
    #[serial]
    fn test_config_dir_respects_xdg_env() {
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", "/tmp/test-config");
        }
        let path = config_dir();
        assert_eq!(path, PathBuf::from("/tmp/test-config/interviewer"));
        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[test]
    #[serial]
    fn test_data_dir_respects_xdg_env() {
        unsafe {
            std::env::set_var("XDG_DATA_HOME", "/tmp/test-data");
        }
        let path = data_dir();
        assert_eq!(path, PathBuf::from("/tmp/test-data/interviewer"));
        unsafe {
            std::env::remove_var("XDG_DATA_HOME");
        }
    }
}
