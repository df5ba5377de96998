//! Seam between the orchestrator and the remote collaborators.

use resilience_core::api::{
    DispatchRequest, DispatchResponse, MitigationRequest, ScenarioRunResponse,
};
use resilience_core::model::{MitigationPlan, Scenario};
use thiserror::Error;

/// Failure of one collaborator call.
///
/// Transport errors and non-success statuses are both terminal for the
/// attempt; the distinction only shows up in the error text.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The request never produced an HTTP response.
    #[error("request to {url} failed")]
    Transport {
        /// Endpoint the request targeted.
        url: String,
        /// Underlying transport error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The collaborator answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Endpoint the request targeted.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The response body did not decode into the expected shape.
    #[error("could not decode response from {url}")]
    Decode {
        /// Endpoint the request targeted.
        url: String,
        /// Underlying decode error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// The three collaborator operations the workflow depends on.
///
/// [`crate::http::HttpEngine`] is the production implementation; tests
/// substitute scripted engines.
#[allow(async_fn_in_trait)]
pub trait EngineApi {
    /// Run the scenario simulation and risk assessment.
    async fn run_scenario(&self, scenario: &Scenario) -> Result<ScenarioRunResponse, EngineError>;

    /// Generate a mitigation plan for the assessed risks.
    async fn request_mitigation(
        &self,
        request: &MitigationRequest,
    ) -> Result<MitigationPlan, EngineError>;

    /// Submit the plan's actions to the dispatch network.
    async fn execute_dispatch(
        &self,
        request: &DispatchRequest,
    ) -> Result<DispatchResponse, EngineError>;
}
