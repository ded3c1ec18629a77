//! Intentionally insecure primitives
//!
//! Every exploitable operation in the server goes through one of these
//! functions: weak credential checks, raw shell execution and unchecked path
//! joins. Keep them here so remediation exercises have a single place to patch.

pub mod auth;
pub mod path;
pub mod shell;

pub use auth::{insecure_password_eq, insecure_token_contains};
pub use path::join_unchecked;
pub use shell::run_checked_exit;
