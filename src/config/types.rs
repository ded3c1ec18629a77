// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::collections::BTreeMap;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
    pub shell: ShellConfig,
    /// Static secrets served by `/api/secrets` (`token` and `admin` gate the endpoints)
    #[serde(default)]
    pub secrets: BTreeMap<String, String>,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Upload storage configuration
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Root directory for uploads and `/read` lookups
    pub upload_dir: String,
}

/// Shell used for `cmd:` reads and admin `exec`
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub program: String,
    /// Arguments placed before the command line (e.g. `-c` or `/C`)
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for ShellConfig {
    #[cfg(windows)]
    fn default() -> Self {
        Self {
            program: "cmd".to_string(),
            args: vec!["/C".to_string()],
        }
    }

    #[cfg(not(windows))]
    fn default() -> Self {
        Self {
            program: "sh".to_string(),
            args: vec!["-c".to_string()],
        }
    }
}

/// Secrets every fresh install starts with
pub const DEFAULT_SECRETS: [(&str, &str); 4] = [
    ("token", "supersecrettoken"),
    ("admin", "admin123"),
    ("hidden", "hidden_value"),
    ("message", "This is a secret message."),
];
