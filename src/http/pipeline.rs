// Explicit ordered middleware chain around every outbound request.
//
// Each stage receives the request and a `Next` handle for the remainder of
// the chain; the terminal transport performs the actual HTTP exchange. Stage
// order is the registration order, so cross-cutting concerns layer exactly
// where the builder put them.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::http::transport::Transport;
use crate::http::{ApiRequest, ApiResponse};

#[async_trait]
pub trait Stage: Send + Sync {
    /// Stage name for logging and debugging.
    fn name(&self) -> &'static str;

    async fn handle(&self, request: ApiRequest, next: Next<'_>) -> ClientResult<ApiResponse>;
}

/// Handle on the remainder of the chain. Consumed by `run`, so a stage can
/// forward the request at most once.
pub struct Next<'a> {
    stages: &'a [Arc<dyn Stage>],
    transport: &'a dyn Transport,
}

impl<'a> Next<'a> {
    pub async fn run(self, request: ApiRequest) -> ClientResult<ApiResponse> {
        match self.stages.split_first() {
            Some((stage, rest)) => {
                tracing::trace!(stage = stage.name(), "entering pipeline stage");
                stage
                    .handle(
                        request,
                        Next {
                            stages: rest,
                            transport: self.transport,
                        },
                    )
                    .await
            }
            None => self.transport.send(request).await,
        }
    }
}

pub struct Pipeline {
    stages: Vec<Arc<dyn Stage>>,
    transport: Arc<dyn Transport>,
}

impl Pipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder { stages: Vec::new() }
    }

    pub async fn execute(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        Next {
            stages: &self.stages,
            transport: self.transport.as_ref(),
        }
        .run(request)
        .await
    }
}

pub struct PipelineBuilder {
    stages: Vec<Arc<dyn Stage>>,
}

impl PipelineBuilder {
    /// Append a stage; earlier registrations wrap later ones.
    pub fn stage(mut self, stage: impl Stage + 'static) -> Self {
        tracing::debug!(stage = stage.name(), "registered pipeline stage");
        self.stages.push(Arc::new(stage));
        self
    }

    pub fn transport(self, transport: Arc<dyn Transport>) -> Pipeline {
        Pipeline {
            stages: self.stages,
            transport,
        }
    }
}
