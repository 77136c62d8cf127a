// Pipeline stage for cross-cutting request feedback: the in-flight loader
// counter and the success/failure toast derived from the response shape.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};
use crate::feedback::{LoaderService, ToastService};
use crate::http::pipeline::{Next, Stage};
use crate::http::{ApiRequest, ApiResponse};

/// Caller opt-out: suppress the toast for this one request.
pub const SKIP_TOAST_HEADER: &str = "x-skip-toast";

/// Caller opt-out: keep this request off the in-flight counter.
pub const SKIP_LOADER_HEADER: &str = "x-skip-loader";

const DEFAULT_FAILURE_MESSAGE: &str = "Request failed. Please try again.";

pub struct FeedbackStage {
    loader: Arc<LoaderService>,
    toasts: Arc<ToastService>,
}

impl FeedbackStage {
    pub fn new(loader: Arc<LoaderService>, toasts: Arc<ToastService>) -> Self {
        Self { loader, toasts }
    }
}

#[async_trait]
impl Stage for FeedbackStage {
    fn name(&self) -> &'static str {
        "feedback"
    }

    async fn handle(&self, mut request: ApiRequest, next: Next<'_>) -> ClientResult<ApiResponse> {
        let is_api_request = request.targets_api();
        let skip_toast = request.headers.contains_key(SKIP_TOAST_HEADER);
        let skip_loader = request.headers.contains_key(SKIP_LOADER_HEADER);

        // Opt-out headers are a client-side contract; never forward them.
        request.headers.remove(SKIP_TOAST_HEADER);
        request.headers.remove(SKIP_LOADER_HEADER);

        let method = request.method.clone();
        let should_toast = is_api_request && !skip_toast && method != Method::GET;

        // The guard releases on every exit path out of this scope, so the
        // counter returns to zero even when the chain errors before dispatch.
        let _loader_guard = (is_api_request && !skip_loader).then(|| self.loader.track());

        match next.run(request).await {
            Ok(response) => {
                if should_toast {
                    self.toast_for_success(&method, &response.body);
                }
                Ok(response)
            }
            Err(error) => {
                if should_toast {
                    let message =
                        extract_error_message(&error).unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
                    self.toasts.error(&message);
                }
                Err(error)
            }
        }
    }
}

impl FeedbackStage {
    fn toast_for_success(&self, method: &Method, body: &Value) {
        if is_failure_payload(body) {
            let message =
                extract_message(body).unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
            self.toasts.error(&message);
            return;
        }

        match extract_message(body) {
            Some(message) => self.toasts.success(&message),
            None => self.toasts.success(default_success_message(method)),
        }
    }
}

/// A 2xx body that still reports `success: false` is a business failure.
fn is_failure_payload(body: &Value) -> bool {
    body.as_object()
        .and_then(|record| record.get("success"))
        .map(|success| success == &Value::Bool(false))
        .unwrap_or(false)
}

fn default_success_message(method: &Method) -> &'static str {
    match *method {
        Method::POST => "Created successfully.",
        Method::PUT | Method::PATCH => "Updated successfully.",
        Method::DELETE => "Deleted successfully.",
        _ => "Request completed successfully.",
    }
}

/// First non-empty of `message` then `error` on an object body.
fn extract_message(body: &Value) -> Option<String> {
    let record = body.as_object()?;
    for key in ["message", "error"] {
        if let Some(text) = record.get(key).and_then(Value::as_str) {
            if !text.trim().is_empty() {
                return Some(text.to_string());
            }
        }
    }
    None
}

/// Failure message resolution: string error body, then `message`/`title` on an
/// object body, then the error's own text.
fn extract_error_message(error: &ClientError) -> Option<String> {
    if let ClientError::Status { body, .. } = error {
        match body {
            Value::String(text) if !text.trim().is_empty() => return Some(text.clone()),
            Value::Object(record) => {
                for key in ["message", "title"] {
                    if let Some(text) = record.get(key).and_then(Value::as_str) {
                        if !text.trim().is_empty() {
                            return Some(text.to_string());
                        }
                    }
                }
            }
            _ => {}
        }
    }

    let text = error.to_string();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;
    use reqwest::StatusCode;
    use serde_json::json;

    #[test]
    fn failure_payload_detection() {
        assert!(is_failure_payload(&json!({ "success": false })));
        assert!(!is_failure_payload(&json!({ "success": true })));
        assert!(!is_failure_payload(&json!("ok")));
        assert!(!is_failure_payload(&Value::Null));
    }

    #[test]
    fn default_messages_by_method() {
        assert_eq!(default_success_message(&Method::POST), "Created successfully.");
        assert_eq!(default_success_message(&Method::PUT), "Updated successfully.");
        assert_eq!(default_success_message(&Method::PATCH), "Updated successfully.");
        assert_eq!(default_success_message(&Method::DELETE), "Deleted successfully.");
        assert_eq!(
            default_success_message(&Method::OPTIONS),
            "Request completed successfully."
        );
    }

    #[test]
    fn message_extraction_prefers_message_then_error() {
        assert_eq!(
            extract_message(&json!({ "message": "saved", "error": "nope" })),
            Some("saved".to_string())
        );
        assert_eq!(
            extract_message(&json!({ "message": " ", "error": "SKU exists" })),
            Some("SKU exists".to_string())
        );
        assert_eq!(extract_message(&json!({ "ok": true })), None);
    }

    #[test]
    fn error_message_resolution_chain() {
        let string_body = ClientError::Status {
            status: StatusCode::BAD_REQUEST,
            headers: HeaderMap::new(),
            body: json!("stock level too low"),
        };
        assert_eq!(
            extract_error_message(&string_body),
            Some("stock level too low".to_string())
        );

        let object_body = ClientError::Status {
            status: StatusCode::CONFLICT,
            headers: HeaderMap::new(),
            body: json!({ "title": "Conflict", "detail": "x" }),
        };
        assert_eq!(extract_error_message(&object_body), Some("Conflict".to_string()));

        let bare = ClientError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            headers: HeaderMap::new(),
            body: Value::Null,
        };
        assert_eq!(
            extract_error_message(&bare),
            Some("request failed with status 500 Internal Server Error".to_string())
        );
    }
}
