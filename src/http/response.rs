//! HTTP response building module
//!
//! Provides builders for the handful of response shapes the handlers emit.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

/// Build 404 Not Found response for unmatched paths
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_error_response(StatusCode::NOT_FOUND, "404 Not Found")
}

/// Build plain-text error response
///
/// Body is the message plus a trailing newline, sniffing disabled.
pub fn build_error_response(status: StatusCode, message: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("X-Content-Type-Options", "nosniff")
        .body(Full::new(Bytes::from(format!("{message}\n"))))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build generic HTML response
pub fn build_html_response(content: impl Into<Bytes>) -> Response<Full<Bytes>> {
    build_typed_response(content.into(), Some("text/html; charset=utf-8"))
}

/// Build `text/plain` response
pub fn build_text_response(content: impl Into<Bytes>) -> Response<Full<Bytes>> {
    build_typed_response(content.into(), Some("text/plain"))
}

/// Build `application/json` response
pub fn build_json_response(content: impl Into<Bytes>) -> Response<Full<Bytes>> {
    build_typed_response(content.into(), Some("application/json"))
}

/// Build raw byte response without a Content-Type header
pub fn build_bytes_response(content: impl Into<Bytes>) -> Response<Full<Bytes>> {
    build_typed_response(content.into(), None)
}

fn build_typed_response(data: Bytes, content_type: Option<&str>) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header("Content-Length", data.len());
    if let Some(content_type) = content_type {
        builder = builder.header("Content-Type", content_type);
    }

    builder.body(Full::new(data)).unwrap_or_else(|e| {
        log_build_error("200", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
