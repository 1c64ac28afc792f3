use std::time::Instant;

use axum::{
    body::Body,
    extract::Request,
    http::{header::CONTENT_LENGTH, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::info;

// Bodies larger than this are elided from the log line; the request itself
// is never rejected here, extractor-level limits still apply downstream.
const BODY_LOG_CAP: usize = 1024 * 1024;

/// Morgan-style request log line: method, path, status, response size,
/// latency and the serialized request body, all to stdout via `tracing`.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    // Buffer the body so it can be logged and then handed on untouched.
    let (parts, body) = req.into_parts();
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(_) => return StatusCode::BAD_REQUEST.into_response(),
    };
    let body_text = if bytes.len() > BODY_LOG_CAP {
        format!("(body of {} bytes elided)", bytes.len())
    } else {
        String::from_utf8_lossy(&bytes).into_owned()
    };
    let req = Request::from_parts(parts, Body::from(bytes));

    let response = next.run(req).await;

    let latency_ms = started.elapsed().as_millis() as u64;
    let size = response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_owned();
    info!(
        %method,
        path = %path,
        status = response.status().as_u16(),
        size = %size,
        latency_ms,
        body = %body_text,
        "request"
    );
    response
}
