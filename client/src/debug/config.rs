//! Logging configuration from environment variables

use std::path::PathBuf;

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "islami_client=info,warn";

/// File name prefix of the rolling log; the appender adds the date.
pub const LOG_FILE_NAME: &str = "islami-client.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level filter (e.g., "islami_client=debug,info")
    pub log_level: String,
    /// Directory for the daily rolling log; no file output when `None`
    pub log_dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: None,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok(),
            std::env::var("ISLAMI_LOG_DIR").ok(),
        )
    }

    fn from_vars(log_level: Option<String>, log_dir: Option<String>) -> Self {
        Self {
            log_level: log_level
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_dir: log_dir
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        let config = LogConfig::from_vars(None, None);
        assert_eq!(config, LogConfig::default());
        assert!(!config.is_debug_enabled());
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = LogConfig::from_vars(Some("  ".to_string()), Some(" ".to_string()));
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn test_explicit_values() {
        let config = LogConfig::from_vars(
            Some("islami_client=debug".to_string()),
            Some("/var/log/islami".to_string()),
        );
        assert!(config.is_debug_enabled());
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/islami")));
    }
}
