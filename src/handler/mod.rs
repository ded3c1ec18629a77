//! Request handler module
//!
//! Routing dispatch plus one module per endpoint. Each handler is terminal:
//! it returns a response or a `HandlerError`, never a fallback.

pub mod admin;
pub mod echo;
pub mod home;
pub mod read;
pub mod router;
pub mod secrets_api;
pub mod upload;

// Re-export main entry point
pub use router::{handle_request, RequestContext};

use crate::config::ShellConfig;
use crate::error::HandlerError;
use crate::insecure;

/// Run a caller-supplied command line and map any failure to a 500.
///
/// Shared by `/read?file=cmd:` and `/admin?exec=`.
async fn execute_command(shell: &ShellConfig, command: &str) -> Result<Vec<u8>, HandlerError> {
    insecure::run_checked_exit(shell, command)
        .await
        .map_err(|e| HandlerError::Internal(format!("Command execution failed: {e}")))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::BTreeMap;
    use std::net::SocketAddr;
    use std::path::Path;
    use std::sync::Arc;

    use http_body_util::{BodyExt, Full};
    use hyper::body::Bytes;
    use hyper::{Request, Response};

    use crate::config::types::{LoggingConfig, ServerConfig, StorageConfig};
    use crate::config::{AppState, Config, ShellConfig, DEFAULT_SECRETS};

    pub fn test_config(storage_dir: &Path) -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                workers: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                access_log: false,
                access_log_format: "combined".to_string(),
                access_log_file: None,
                error_log_file: None,
            },
            storage: StorageConfig {
                upload_dir: storage_dir.to_string_lossy().into_owned(),
            },
            shell: ShellConfig::default(),
            secrets: DEFAULT_SECRETS
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    pub fn test_state(storage_dir: &Path) -> Arc<AppState> {
        Arc::new(AppState::new(&test_config(storage_dir)))
    }

    pub fn peer() -> SocketAddr {
        "10.0.0.7:40123".parse().unwrap()
    }

    pub fn get(uri: &str) -> Request<Full<Bytes>> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Full::new(Bytes::new()))
            .unwrap()
    }

    pub const BOUNDARY: &str = "hackable-boundary";

    /// Multipart body with a single file field
    pub fn multipart_body(field: &str, filename: &str, content: &[u8]) -> Vec<u8> {
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    pub fn upload(method: &str, body: Vec<u8>) -> Request<Full<Bytes>> {
        Request::builder()
            .method(method)
            .uri("/upload")
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Full::new(Bytes::from(body)))
            .unwrap()
    }

    pub async fn body_bytes(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    pub async fn body_string(resp: Response<Full<Bytes>>) -> String {
        String::from_utf8(body_bytes(resp).await.to_vec()).unwrap()
    }
}
