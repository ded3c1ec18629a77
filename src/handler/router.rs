//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: exact path matching against the
//! six fixed routes, dispatch logging, error rendering and access logging.

use crate::config::AppState;
use crate::handler::{admin, echo, home, read, secrets_api, upload};
use crate::http::{self, Query};
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::http::request::Parts;
use hyper::{HeaderMap, Method, Request, Response};
use std::convert::Infallible;
use std::fmt::Display;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

const NO_ROUTE_ACTION: &str = "No route matched";

/// The fixed routing table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Upload,
    Read,
    Admin,
    Echo,
    Secrets,
}

impl Route {
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Upload,
        Self::Read,
        Self::Admin,
        Self::Echo,
        Self::Secrets,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Upload => "/upload",
            Self::Read => "/read",
            Self::Admin => "/admin",
            Self::Echo => "/echo",
            Self::Secrets => "/api/secrets",
        }
    }

    /// Human-readable label written to the dispatch log line
    pub const fn action(self) -> &'static str {
        match self {
            Self::Home => "Rendering home page",
            Self::Upload => "Handling file upload",
            Self::Read => "Handling file read or command execution",
            Self::Admin => "Handling admin panel access",
            Self::Echo => "Handling echo message",
            Self::Secrets => "Handling secrets API access",
        }
    }

    /// Exact path match, no prefix or trailing-slash folding
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// Per-request inputs handed to every handler
pub struct RequestContext<'a> {
    pub method: &'a Method,
    pub path: &'a str,
    pub query: Query,
    pub headers: &'a HeaderMap,
    pub peer_addr: SocketAddr,
    pub state: &'a AppState,
}

/// Main entry point for HTTP request handling
///
/// Generic over the body so the same path serves hyper's `Incoming` and
/// in-memory bodies.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: Display,
{
    let started = Instant::now();
    let (parts, body) = req.into_parts();
    let path = parts.uri.path();
    let route = Route::from_path(path);

    logger::log_request(
        parts.method.as_str(),
        path,
        &peer_addr,
        route.map_or(NO_ROUTE_ACTION, Route::action),
    );

    let ctx = RequestContext {
        method: &parts.method,
        path,
        query: Query::parse(parts.uri.query()),
        headers: &parts.headers,
        peer_addr,
        state: &state,
    };

    let response = match route {
        Some(route) => dispatch(route, &ctx, body)
            .await
            .unwrap_or_else(|err| err.into_response(ctx.path)),
        None => http::build_404_response(),
    };

    if state.access_log() {
        log_access(&parts, peer_addr, &response, started, &state);
    }

    Ok(response)
}

async fn dispatch<B>(
    route: Route,
    ctx: &RequestContext<'_>,
    body: B,
) -> crate::error::HandlerResult
where
    B: Body,
    B::Error: Display,
{
    match route {
        Route::Home => Ok(home::handle(ctx)),
        Route::Upload => upload::handle(ctx, body).await,
        Route::Read => read::handle(ctx).await,
        Route::Admin => admin::handle(ctx).await,
        Route::Echo => echo::handle(ctx),
        Route::Secrets => secrets_api::handle(ctx),
    }
}

fn log_access(
    parts: &Parts,
    peer_addr: SocketAddr,
    response: &Response<Full<Bytes>>,
    started: Instant,
    state: &AppState,
) {
    let header = |name: &str| {
        parts
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    };

    let mut entry = AccessLogEntry::new(peer_addr, parts.method.as_str(), parts.uri.path());
    entry.query = parts.uri.query().map(ToString::to_string);
    entry.http_version = match parts.version {
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        _ => "1.1",
    }
    .to_string();
    entry.referer = header("referer");
    entry.user_agent = header("user-agent");

    let body_bytes = response.body().size_hint().exact().unwrap_or(0);
    entry.finish(
        response.status().as_u16(),
        usize::try_from(body_bytes).unwrap_or(usize::MAX),
        started.elapsed(),
    );

    logger::log_access(&entry, &state.config.logging.access_log_format);
}
