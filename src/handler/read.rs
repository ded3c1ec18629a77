//! `/read` file reader with a hidden command mode
//!
//! INTENTIONALLY INSECURE: `file=cmd:<line>` runs `<line>` through the shell,
//! anything else is read from the storage root with no traversal check.

use crate::error::{HandlerError, HandlerResult};
use crate::handler::{execute_command, RequestContext};
use crate::http;
use crate::insecure;
use crate::logger;

/// Prefix that switches `/read` from file mode to command mode
pub const COMMAND_PREFIX: &str = "cmd:";

pub async fn handle(ctx: &RequestContext<'_>) -> HandlerResult {
    let file = ctx.query.get("file");
    if file.is_empty() {
        return Err(HandlerError::BadRequest("No file specified".to_string()));
    }

    if let Some(command) = file.strip_prefix(COMMAND_PREFIX) {
        logger::log_action(&format!("Executing command: {command}"));
        let output = execute_command(&ctx.state.shell, command).await?;
        logger::log_action(&format!("Executed command: {command}"));
        return Ok(http::build_text_response(output));
    }

    let path = insecure::join_unchecked(&ctx.state.storage_dir, file);
    logger::log_action(&format!("Reading file: {}", path.display()));
    let data = tokio::fs::read(&path).await.map_err(|e| {
        HandlerError::Internal(format!("Failed to read file: open {}: {e}", path.display()))
    })?;

    logger::log_action(&format!("File read successfully: {}", path.display()));
    Ok(http::build_bytes_response(data))
}
