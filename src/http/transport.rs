// Terminal pipeline step: the actual HTTP exchange via reqwest.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};
use crate::http::{ApiRequest, ApiResponse};

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse>;
}

pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> ClientResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone());
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!(method = %request.method, url = %request.url, "sending request");
        let response = builder.send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;
        let body = parse_body(&bytes);

        if status.is_success() {
            Ok(ApiResponse {
                status,
                headers,
                body,
            })
        } else {
            tracing::debug!(%status, url = %request.url, "request failed");
            Err(ClientError::Status {
                status,
                headers,
                body,
            })
        }
    }
}

/// Empty bodies parse to `Null`; non-JSON text is kept as a bare string so
/// the feedback stage can still surface backend error text.
fn parse_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_parsing_shapes() {
        assert_eq!(parse_body(b""), Value::Null);
        assert_eq!(
            parse_body(b"{\"success\":true}"),
            serde_json::json!({ "success": true })
        );
        assert_eq!(
            parse_body(b"stock level too low"),
            Value::String("stock level too low".to_string())
        );
    }
}
