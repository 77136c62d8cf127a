// Shared harness: a scripted transport and recording navigator so the full
// pipeline runs without a network.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use jsonwebtoken::{encode, EncodingKey, Header};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde_json::{json, Value};

use opsdeck::api::ApiClient;
use opsdeck::error::{ClientError, ClientResult};
use opsdeck::feedback::{LoaderService, ToastService};
use opsdeck::http::{ApiRequest, ApiResponse, Transport};
use opsdeck::session::{MemoryStorage, Navigator, SessionStore};

pub const TEST_SECRET: &[u8] = b"opsdeck-test-secret";
pub const BASE_URL: &str = "https://localhost:7118/api";

pub fn mint_token(claims: &Value) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .expect("HS256 signing cannot fail with a byte-slice secret")
}

pub fn valid_token() -> String {
    mint_token(&json!({
        "sub": "user-1",
        "email": "ops@example.com",
        "role": "admin",
        "companyId": "42",
        "userCode": "1001",
        "exp": 4_000_000_000i64,
    }))
}

pub fn expired_token() -> String {
    mint_token(&json!({
        "sub": "user-1",
        "email": "ops@example.com",
        "role": "admin",
        "exp": 1_000i64,
    }))
}

/// Transport that replays a scripted queue of outcomes and records every
/// request it receives, post-pipeline.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<ClientResult<ApiResponse>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_ok(&self, body: Value) {
        self.push_ok_with_headers(body, HeaderMap::new());
    }

    pub fn push_ok_with_headers(&self, body: Value, headers: HeaderMap) {
        self.replies.lock().unwrap().push_back(Ok(ApiResponse {
            status: StatusCode::OK,
            headers,
            body,
        }));
    }

    pub fn push_status_error(&self, status: u16, body: Value) {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(ClientError::Status {
                status: StatusCode::from_u16(status).expect("valid status code"),
                headers: HeaderMap::new(),
                body,
            }));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("at least one request reached the transport")
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("a scripted reply for every request")
    }
}

/// Navigator that records redirect targets instead of navigating.
#[derive(Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

pub struct Harness {
    pub client: ApiClient,
    pub transport: Arc<MockTransport>,
    pub session: Arc<SessionStore>,
    pub loader: Arc<LoaderService>,
    pub toasts: Arc<ToastService>,
    pub navigator: Arc<RecordingNavigator>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_storage(Arc::new(MemoryStorage::new()))
    }

    pub fn logged_in() -> Self {
        let harness = Self::new();
        assert!(harness.session.set_session_from_token(&valid_token()));
        harness
    }

    pub fn with_storage(storage: Arc<MemoryStorage>) -> Self {
        let transport = MockTransport::new();
        let session = Arc::new(SessionStore::new(storage));
        let loader = Arc::new(LoaderService::new());
        let toasts = Arc::new(ToastService::new());
        let navigator = RecordingNavigator::new();

        let client = ApiClient::with_transport(
            BASE_URL,
            transport.clone(),
            session.clone(),
            loader.clone(),
            toasts.clone(),
            navigator.clone(),
        )
        .expect("harness base url is valid");

        Self {
            client,
            transport,
            session,
            loader,
            toasts,
            navigator,
        }
    }
}
