// Typed client for the OpsDeck backend. Every call goes through the request
// pipeline, so bearer attachment, token rotation, 401/403 eviction, loading
// tracking, and toast feedback apply uniformly. Methods here are thin: build
// a request, execute, decode. All business logic lives on the backend.

pub mod auth;
pub mod catalog;
pub mod fulfillment;
pub mod marketplace;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config;
use crate::error::ClientResult;
use crate::feedback::{LoaderService, ToastService};
use crate::http::{ApiRequest, ApiResponse, AuthStage, FeedbackStage, HttpTransport, Pipeline, Transport};
use crate::session::{Navigator, SessionStore};

pub struct ApiClient {
    base_url: Url,
    pipeline: Pipeline,
    session: Arc<SessionStore>,
    loader: Arc<LoaderService>,
    toasts: Arc<ToastService>,
}

impl ApiClient {
    /// Build a client against the configured backend with the standard
    /// pipeline: feedback stage wrapping auth stage wrapping the transport.
    pub fn new(
        session: Arc<SessionStore>,
        loader: Arc<LoaderService>,
        toasts: Arc<ToastService>,
        navigator: Arc<dyn Navigator>,
    ) -> ClientResult<Self> {
        let cfg = config::config();
        let transport = HttpTransport::new(Duration::from_secs(cfg.api.timeout_secs))?;
        Self::with_transport(
            &cfg.api.base_url,
            Arc::new(transport),
            session,
            loader,
            toasts,
            navigator,
        )
    }

    /// Same wiring with an injected transport. This is how tests drive the
    /// full pipeline without a network.
    pub fn with_transport(
        base_url: &str,
        transport: Arc<dyn Transport>,
        session: Arc<SessionStore>,
        loader: Arc<LoaderService>,
        toasts: Arc<ToastService>,
        navigator: Arc<dyn Navigator>,
    ) -> ClientResult<Self> {
        let mut base_url = Url::parse(base_url)?;
        // A trailing slash keeps Url::join from replacing the /api segment
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let pipeline = Pipeline::builder()
            .stage(FeedbackStage::new(loader.clone(), toasts.clone()))
            .stage(AuthStage::new(session.clone(), navigator))
            .transport(transport);

        Ok(Self {
            base_url,
            pipeline,
            session,
            loader,
            toasts,
        })
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn loader(&self) -> &Arc<LoaderService> {
        &self.loader
    }

    pub fn toasts(&self) -> &Arc<ToastService> {
        &self.toasts
    }

    /// Build a request against the backend. Callers may add the
    /// `x-skip-toast` / `x-skip-loader` headers before executing.
    pub fn request(&self, method: Method, path: &str) -> ClientResult<ApiRequest> {
        let url = self.base_url.join(path.trim_start_matches('/'))?;
        Ok(ApiRequest::new(method, url))
    }

    /// Run a request through the full pipeline.
    pub async fn execute(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        self.pipeline.execute(request).await
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.request(Method::GET, path)?;
        self.execute(request).await?.json()
    }

    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> ClientResult<T> {
        let request = self
            .request(Method::POST, path)?
            .with_body(serde_json::to_value(body)?);
        self.execute(request).await?.json()
    }

    /// POST where the response body carries nothing the caller needs.
    pub(crate) async fn post_unit(&self, path: &str, body: &impl Serialize) -> ClientResult<()> {
        let request = self
            .request(Method::POST, path)?
            .with_body(serde_json::to_value(body)?);
        self.execute(request).await?;
        Ok(())
    }

    pub(crate) async fn put_unit(&self, path: &str, body: &impl Serialize) -> ClientResult<()> {
        let request = self
            .request(Method::PUT, path)?
            .with_body(serde_json::to_value(body)?);
        self.execute(request).await?;
        Ok(())
    }

    pub(crate) async fn delete_unit(&self, path: &str) -> ClientResult<()> {
        let request = self.request(Method::DELETE, path)?;
        self.execute(request).await?;
        Ok(())
    }
}
