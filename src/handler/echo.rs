//! `/echo` reflected message
//!
//! INTENTIONALLY INSECURE: `msg` is spliced into the HTML without escaping.

use crate::error::{HandlerError, HandlerResult};
use crate::handler::RequestContext;
use crate::http;
use crate::logger;

pub fn handle(ctx: &RequestContext<'_>) -> HandlerResult {
    let msg = ctx.query.get("msg");
    if msg.is_empty() {
        return Err(HandlerError::BadRequest("No message provided".to_string()));
    }

    let html = format!("<html><body><h1>Your Message:</h1><p>{msg}</p></body></html>");
    logger::log_action(&format!("Echo message sent: {msg}"));
    Ok(http::build_html_response(html))
}

#[cfg(test)]
mod tests {
    use crate::handler::handle_request;
    use crate::handler::test_support::*;
    use hyper::StatusCode;

    #[tokio::test]
    async fn test_missing_or_empty_msg() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(dir.path());
        for uri in ["/echo", "/echo?msg="] {
            let resp = handle_request(get(uri), state.clone(), peer()).await.unwrap();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            assert_eq!(body_string(resp).await, "No message provided\n");
        }
    }

    #[tokio::test]
    async fn test_markup_is_not_escaped() {
        let dir = tempfile::tempdir().unwrap();
        let uri = "/echo?msg=%3Cimg+src%3Dx+onerror%3Dalert(1)%3E";
        let resp = handle_request(get(uri), test_state(dir.path()), peer())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            body_string(resp).await,
            "<html><body><h1>Your Message:</h1><p><img src=x onerror=alert(1)></p></body></html>"
        );
    }
}
