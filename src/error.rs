//! Handler error taxonomy
//!
//! Every handler is terminal: a failure becomes exactly one HTTP error
//! response plus one error-log line. Messages are shown to the caller
//! verbatim, OS error text included.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::http;
use crate::logger;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandlerError {
    /// Malformed or missing required input
    #[error("{0}")]
    BadRequest(String),
    /// Wrong HTTP verb
    #[error("{0}")]
    MethodNotAllowed(String),
    /// Failed credential or token check
    #[error("{0}")]
    Unauthorized(String),
    /// Filesystem or subprocess failure
    #[error("{0}")]
    Internal(String),
}

impl HandlerError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Log the failure and render it as a plain-text error response
    pub fn into_response(self, path: &str) -> Response<Full<Bytes>> {
        logger::log_error(&format!("{path} -> {}: {self}", self.status().as_u16()));
        let mut resp = http::build_error_response(self.status(), &self.to_string());
        if matches!(self, Self::MethodNotAllowed(_)) {
            resp.headers_mut()
                .insert(hyper::header::ALLOW, hyper::header::HeaderValue::from_static("POST"));
        }
        resp
    }
}

/// Result type returned by every handler
pub type HandlerResult = Result<Response<Full<Bytes>>, HandlerError>;
