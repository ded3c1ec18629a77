//! `/api/secrets` JSON dump
//!
//! INTENTIONALLY INSECURE: authorization is a substring check on the raw
//! `Authorization` header, and success discloses every secret at once.

use hyper::header::AUTHORIZATION;

use crate::error::{HandlerError, HandlerResult};
use crate::handler::RequestContext;
use crate::http;
use crate::insecure;
use crate::logger;

pub fn handle(ctx: &RequestContext<'_>) -> HandlerResult {
    let header = ctx
        .headers
        .get(AUTHORIZATION)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default();

    if !insecure::insecure_token_contains(&header, ctx.state.secrets.token()) {
        logger::log_warning(&format!(
            "Unauthorized access attempt to secrets API from {}",
            ctx.peer_addr
        ));
        return Err(HandlerError::Unauthorized("Unauthorized access".to_string()));
    }

    let json = ctx
        .state
        .secrets
        .to_json()
        .map_err(|e| HandlerError::Internal(format!("Failed to encode secrets: {e}")))?;

    logger::log_action(&format!("Secrets API accessed by {}", ctx.peer_addr));
    Ok(http::build_json_response(json))
}
