//! `/upload` multipart file upload
//!
//! INTENTIONALLY INSECURE: the whole body is buffered with no size cap, and
//! the client-supplied filename is appended to the storage root verbatim,
//! so `../` segments write anywhere the process can reach.

use std::convert::Infallible;
use std::fmt::Display;

use http_body_util::BodyExt;
use hyper::body::{Body, Bytes};
use hyper::header::CONTENT_TYPE;
use hyper::{HeaderMap, Method};

use crate::error::{HandlerError, HandlerResult};
use crate::handler::RequestContext;
use crate::http;
use crate::insecure;
use crate::logger;

/// Form field that must carry the file
const FILE_FIELD: &str = "file";

/// A file pulled out of the multipart form
#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub content: Bytes,
}

#[derive(Debug, thiserror::Error)]
enum FormError {
    #[error("request Content-Type isn't multipart/form-data")]
    NotMultipart,
    #[error("failed to read request body: {0}")]
    Body(String),
    #[error("{0}")]
    Multipart(#[from] multer::Error),
    #[error("no such file")]
    MissingFile,
}

pub async fn handle<B>(ctx: &RequestContext<'_>, body: B) -> HandlerResult
where
    B: Body,
    B::Error: Display,
{
    if *ctx.method != Method::POST {
        return Err(HandlerError::MethodNotAllowed(
            "Only POST method is allowed".to_string(),
        ));
    }

    let file = read_form_file(ctx.headers, body)
        .await
        .map_err(|e| HandlerError::BadRequest(format!("Failed to parse file: {e}")))?;

    let path = insecure::join_unchecked(&ctx.state.storage_dir, &file.filename);
    tokio::fs::write(&path, &file.content).await.map_err(|e| {
        HandlerError::Internal(format!("Failed to save file: open {}: {e}", path.display()))
    })?;

    let message = format!("File uploaded successfully: {}", path.display());
    logger::log_action(&message);
    Ok(http::build_text_response(message))
}

/// Buffer the body and return the first `file` field that carries a filename
async fn read_form_file<B>(headers: &HeaderMap, body: B) -> Result<UploadedFile, FormError>
where
    B: Body,
    B::Error: Display,
{
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .ok_or(FormError::NotMultipart)?;
    let boundary = multer::parse_boundary(content_type).map_err(|_| FormError::NotMultipart)?;

    let data = body
        .collect()
        .await
        .map_err(|e| FormError::Body(e.to_string()))?
        .to_bytes();

    let stream = futures_util::stream::once(async move { Ok::<Bytes, Infallible>(data) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(filename) = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(ToString::to_string)
        else {
            continue;
        };

        let content = field.bytes().await?;
        return Ok(UploadedFile { filename, content });
    }

    Err(FormError::MissingFile)
}
