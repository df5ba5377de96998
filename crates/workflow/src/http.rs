//! reqwest implementation of the collaborator seam.

use resilience_core::api::{
    DispatchRequest, DispatchResponse, MitigationRequest, ScenarioRunResponse,
};
use resilience_core::model::{MitigationPlan, Scenario};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::engine::{EngineApi, EngineError};

/// Path of the scenario simulation endpoint.
pub const SCENARIO_RUN_PATH: &str = "/scenario/run";
/// Path of the mitigation planning endpoint.
pub const MITIGATE_PATH: &str = "/agent/mitigate";
/// Path of the dispatch execution endpoint.
pub const DISPATCH_PATH: &str = "/dispatch/execute";

/// HTTP client for the engine base URL hosting all three collaborators.
#[derive(Debug, Clone)]
pub struct HttpEngine {
    client: reqwest::Client,
    base_url: String,
}

impl HttpEngine {
    /// `base_url` like `http://127.0.0.1:8000`; a trailing slash is
    /// tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    async fn post_json<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp, EngineError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| EngineError::Transport {
                url: url.clone(),
                source: Box::new(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response.json().await.map_err(|e| EngineError::Decode {
            url,
            source: Box::new(e),
        })
    }
}

impl EngineApi for HttpEngine {
    async fn run_scenario(&self, scenario: &Scenario) -> Result<ScenarioRunResponse, EngineError> {
        self.post_json(SCENARIO_RUN_PATH, scenario).await
    }

    async fn request_mitigation(
        &self,
        request: &MitigationRequest,
    ) -> Result<MitigationPlan, EngineError> {
        self.post_json(MITIGATE_PATH, request).await
    }

    async fn execute_dispatch(
        &self,
        request: &DispatchRequest,
    ) -> Result<DispatchResponse, EngineError> {
        self.post_json(DISPATCH_PATH, request).await
    }
}
