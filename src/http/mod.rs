pub mod auth_stage;
pub mod feedback_stage;
pub mod pipeline;
pub mod transport;

pub use auth_stage::AuthStage;
pub use feedback_stage::{FeedbackStage, SKIP_LOADER_HEADER, SKIP_TOAST_HEADER};
pub use pipeline::{Next, Pipeline, PipelineBuilder, Stage};
pub use transport::{HttpTransport, Transport};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::{ClientError, ClientResult};

/// An outbound request as it travels through the pipeline. Stages may clone
/// and rewrite it before it reaches the transport.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Set a header, ignoring names or values that are not valid HTTP.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::try_from(name),
            HeaderValue::try_from(value),
        ) {
            self.headers.insert(name, value);
        } else {
            tracing::warn!(name, "ignoring invalid request header");
        }
        self
    }

    /// Whether this request targets the backend API surface, identified by
    /// the `/api/` path segment marker.
    pub fn targets_api(&self) -> bool {
        self.url.path().contains("/api/")
    }
}

/// A terminal, well-formed HTTP response. Non-2xx responses never reach this
/// type; the transport raises them as `ClientError::Status`.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Parsed body: JSON value, bare string for non-JSON text, `Null` when empty.
    pub body: Value,
}

impl ApiResponse {
    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        serde_json::from_value(self.body.clone()).map_err(ClientError::from)
    }
}
