//! In-memory secret store
//!
//! Fixed at startup from configuration and never mutated afterwards.

use serde::Serialize;
use std::collections::BTreeMap;

/// Key holding the bearer token for `/api/secrets`
pub const TOKEN_KEY: &str = "token";
/// Key holding the admin panel password
pub const ADMIN_KEY: &str = "admin";

/// Read-only mapping of secret name to value
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SecretStore(BTreeMap<String, String>);

impl SecretStore {
    pub const fn new(secrets: BTreeMap<String, String>) -> Self {
        Self(secrets)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Admin password, empty when unset
    pub fn admin(&self) -> &str {
        self.get(ADMIN_KEY).unwrap_or_default()
    }

    /// API token, empty when unset
    pub fn token(&self) -> &str {
        self.get(TOKEN_KEY).unwrap_or_default()
    }

    /// Serialize the whole store as a flat JSON object
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

impl<K, V> FromIterator<(K, V)> for SecretStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
