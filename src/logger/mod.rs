//! Logger module
//!
//! Provides logging utilities for the server including:
//! - Server lifecycle logging
//! - Per-request dispatch lines and handler action lines
//! - Access logging with multiple formats
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;
use std::path::Path;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log
fn write_error(message: &str) {
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, storage_dir: &Path) {
    write_info("======================================");
    write_info(&format!("Hackable server is running on {addr}..."));
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Storage directory: {}", storage_dir.display()));
    write_info(&format!(
        "Shell: {} {}",
        config.shell.program,
        config.shell.args.join(" ")
    ));
    write_info(&format!("Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("WARNING: this server is intentionally vulnerable, never expose it");
    write_info("======================================");
}

/// Dispatch line emitted for every routed request
pub fn log_request(method: &str, path: &str, peer_addr: &SocketAddr, action: &str) {
    write_info(&format!(
        "Request: {method} {path} from {peer_addr} - Action: {action}"
    ));
}

/// Handler outcome line (file written, command executed, ...)
pub fn log_action(message: &str) {
    write_info(message);
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("Error: {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_info(&entry.format(format));
}

pub fn log_shutdown(reason: &str) {
    write_info(&format!("[Shutdown] {reason}, no longer accepting connections"));
}
