//! Request/response contracts of the three remote collaborators.

use serde::{Deserialize, Serialize};

use crate::model::{Asset, DispatchLogEntry, MitigationAction, Risk, Scenario};

/// Response of the scenario engine.
///
/// The request body is [`Scenario`] itself. Fields the engine omits decode
/// as empty; fields beyond these are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioRunResponse {
    /// Asset registry for the scenario location.
    #[serde(default)]
    pub assets: Vec<Asset>,
    /// Assessed risks, keyed into `assets` by id.
    #[serde(default)]
    pub risks: Vec<Risk>,
}

/// Request to the mitigation planner: the full run context.
///
/// The response body is [`crate::model::MitigationPlan`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MitigationRequest {
    /// The submitted scenario.
    pub scenario: Scenario,
    /// Risks the plan should address.
    pub risks: Vec<Risk>,
    /// Assets referenced by the risks.
    pub assets: Vec<Asset>,
}

/// Request to the dispatch network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchRequest {
    /// Actions to submit, in plan order.
    pub actions: Vec<MitigationAction>,
}

/// Response of the dispatch network. A missing log decodes as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DispatchResponse {
    /// Activity log, in dispatch response order.
    #[serde(default)]
    pub log: Vec<DispatchLogEntry>,
}
