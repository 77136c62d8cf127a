// Pipeline stage for bearer attachment, token rotation, and 401/403 eviction.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::config;
use crate::error::ClientResult;
use crate::http::pipeline::{Next, Stage};
use crate::http::{ApiRequest, ApiResponse};
use crate::session::{Navigator, SessionStore};

/// Fallback response header the backend uses for token rotation.
const ACCESS_TOKEN_HEADER: &str = "x-access-token";

pub struct AuthStage {
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl AuthStage {
    pub fn new(session: Arc<SessionStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }
}

#[async_trait]
impl Stage for AuthStage {
    fn name(&self) -> &'static str {
        "auth"
    }

    async fn handle(&self, mut request: ApiRequest, next: Next<'_>) -> ClientResult<ApiResponse> {
        // Attach the bearer only while it is usable; an expired token is
        // worse than none, the backend would reject the call outright.
        if let Some(token) = self.session.token() {
            if !self.session.is_token_expired() {
                if let Ok(value) = HeaderValue::try_from(format!("Bearer {token}")) {
                    request.headers.insert(AUTHORIZATION, value);
                }
            }
        }

        match next.run(request).await {
            Ok(response) => {
                if let Some(rotated) = rotated_token(&response.headers) {
                    if self.session.set_session_from_token(&rotated) {
                        tracing::debug!("session refreshed from response header");
                    } else {
                        tracing::warn!("refresh header carried an undecodable token, keeping session");
                    }
                }
                Ok(response)
            }
            Err(error) => {
                if error.is_auth_failure() {
                    tracing::info!(status = ?error.status(), "auth failure, evicting session");
                    self.session.logout();
                    self.navigator.navigate(&config::config().routes.login);
                }
                // Side effects only; the caller always sees the original error
                Err(error)
            }
        }
    }
}

/// Read a rotated bearer token from `Authorization` (preferred) or
/// `x-access-token`, stripping a `Bearer ` prefix when present.
fn rotated_token(headers: &HeaderMap) -> Option<String> {
    let raw = headers
        .get(AUTHORIZATION)
        .or_else(|| headers.get(ACCESS_TOKEN_HEADER))?
        .to_str()
        .ok()?;

    let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}
