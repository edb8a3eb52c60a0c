//! Request diagnostics
//!
//! Dumps headers and the raw body of each request at DEBUG. Request content
//! may be sensitive, so this stays off under the default filter.

use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::Level;

use crate::AppState;

pub const TARGET: &str = "phishguard::request";

/// Middleware: log request headers and body before the handler runs
///
/// The body is buffered through the same `Bytes` extractor the handler uses,
/// so oversized bodies get the same rejection whether logging is on or off.
pub async fn log_request(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    if !tracing::enabled!(target: TARGET, Level::DEBUG) {
        return Ok(next.run(req).await);
    }

    tracing::debug!(
        target: TARGET,
        method = %req.method(),
        uri = %req.uri(),
        headers = ?req.headers(),
        "Received request"
    );

    let (parts, body) = req.into_parts();
    let bytes = Bytes::from_request(Request::from_parts(parts.clone(), body), &state)
        .await
        .map_err(IntoResponse::into_response)?;

    tracing::debug!(
        target: TARGET,
        "Request data: {}",
        String::from_utf8_lossy(&bytes)
    );

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}
