// Application state module
// Immutable per-process state shared by every connection task

use std::path::PathBuf;

use super::types::{Config, ShellConfig};
use crate::secrets::SecretStore;

/// Application state
///
/// Built once at startup and handed to each connection behind an `Arc`.
/// Nothing in here is mutated afterwards, so handlers read it without locks.
pub struct AppState {
    pub config: Config,
    pub secrets: SecretStore,
    pub storage_dir: PathBuf,
    pub shell: ShellConfig,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            secrets: SecretStore::new(config.secrets.clone()),
            storage_dir: PathBuf::from(&config.storage.upload_dir),
            shell: config.shell.clone(),
        }
    }

    /// Access logging flag
    pub const fn access_log(&self) -> bool {
        self.config.logging.access_log
    }
}
