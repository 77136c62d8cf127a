// Client-side error types for the OpsDeck API surface
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by the request pipeline and the typed API client.
///
/// `Status` carries the parsed response body so downstream stages can inspect
/// the backend's `{success, message, error}` envelope without re-reading the
/// wire. Token decode failures are not errors at all; they degrade to
/// `None`/`false` in the session layer.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-2xx response from the backend. The response body is preserved
    /// (JSON object, bare string, or `Null` when empty).
    #[error("request failed with status {status}")]
    Status {
        status: StatusCode,
        headers: HeaderMap,
        body: Value,
    },

    /// Network-level failure: connect, timeout, TLS, malformed response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),

    /// Request payload serialization or response body deserialization failed.
    #[error("invalid json payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status of the failed response, if this was an HTTP-level error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for the two statuses that evict the session (401, 403).
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
