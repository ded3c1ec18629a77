// Configuration module entry point
// Loads the server configuration and builds the shared runtime state

mod state;
pub mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, ShellConfig, DEFAULT_SECRETS};

/// Default config file looked up next to the binary (extension optional)
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from the default `config.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// Environment variables prefixed with `HACKABLE` override the file,
    /// e.g. `HACKABLE_SERVER__PORT=9090`.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let shell = ShellConfig::default();

        let mut builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("storage.upload_dir", "./uploads")?
            .set_default("shell.program", shell.program)?
            .set_default("shell.args", shell.args)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?;

        for (key, value) in DEFAULT_SECRETS {
            builder = builder.set_default(format!("secrets.{key}"), value)?;
        }

        let settings = builder
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("HACKABLE")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("shell.args")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let cfg = Config::load_from("does-not-exist/hackable").unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.storage.upload_dir, "./uploads");
        assert_eq!(cfg.shell, ShellConfig::default());
        assert_eq!(cfg.secrets.get("token").map(String::as_str), Some("supersecrettoken"));
        assert_eq!(cfg.secrets.get("admin").map(String::as_str), Some("admin123"));
        assert_eq!(cfg.secrets.len(), DEFAULT_SECRETS.len());
    }

    #[test]
    fn test_file_overrides_and_extends_secrets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hackable.toml");
        std::fs::write(
            &path,
            r#"
[server]
port = 9191

[storage]
upload_dir = "/tmp/hackable-uploads"

[secrets]
admin = "letmein"
db_password = "hunter2"
"#,
        )
        .unwrap();

        let cfg = Config::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.port, 9191);
        assert_eq!(cfg.storage.upload_dir, "/tmp/hackable-uploads");
        assert_eq!(cfg.secrets.get("admin").map(String::as_str), Some("letmein"));
        assert_eq!(cfg.secrets.get("db_password").map(String::as_str), Some("hunter2"));
        // Untouched defaults survive the merge
        assert_eq!(cfg.secrets.get("token").map(String::as_str), Some("supersecrettoken"));
    }

    #[test]
    fn test_invalid_socket_addr() {
        let mut cfg = Config::load_from("does-not-exist/hackable").unwrap();
        cfg.server.host = "not a host".to_string();
        let err = cfg.get_socket_addr().unwrap_err();
        assert!(err.starts_with("Invalid address"));
    }
}
