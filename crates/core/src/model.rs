//! Domain data model: scenarios, assets, risks, plans, and the workflow
//! stage enumeration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of weather event a scenario simulates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Sustained high temperatures.
    Heatwave,
    /// Heavy rainfall / flooding.
    Flood,
}

impl EventType {
    /// Wire/display name.
    pub fn label(self) -> &'static str {
        match self {
            EventType::Heatwave => "heatwave",
            EventType::Flood => "flood",
        }
    }
}

/// Weather scenario submitted for a simulation run.
///
/// Immutable once submitted; a new run replaces it wholesale. Doubles as the
/// request body of the scenario engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    /// Location name understood by the scenario engine, e.g. "London".
    pub location: String,
    /// Event kind.
    pub event_type: EventType,
    /// Event start, RFC 3339.
    pub start_date: DateTime<Utc>,
    /// Event duration in hours (at least 1, enforced by the form layer).
    pub duration_hours: u32,
}

/// Criticality rating of a grid asset.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Criticality {
    /// Loss is tolerable.
    Low,
    /// Default when the registry does not say.
    #[default]
    Medium,
    /// Critical infrastructure.
    High,
}

/// A physical or logical grid element with a geographic position.
///
/// The asset set is replaced wholesale on each scenario run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    /// Unique within a run.
    pub id: String,
    /// Human name, e.g. "Substation A".
    pub name: String,
    /// Asset category as reported by the engine, e.g. "substation".
    #[serde(rename = "type")]
    pub kind: String,
    /// Latitude in degrees. NaN when the engine omitted the coordinate.
    #[serde(default = "missing_coordinate")]
    pub lat: f64,
    /// Longitude in degrees. NaN when the engine omitted the coordinate.
    #[serde(default = "missing_coordinate")]
    pub lon: f64,
    /// Rated capacity in kilowatts.
    pub capacity_kw: f64,
    /// Criticality rating from the asset registry.
    #[serde(default)]
    pub criticality: Criticality,
}

fn missing_coordinate() -> f64 {
    f64::NAN
}

/// Assessed hazard level, ordered most severe first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// Outage or damage expected without intervention.
    Critical,
    /// Thresholds approached; intervention likely needed.
    High,
    /// Elevated; monitor closely.
    Medium,
    /// Minor impact expected.
    Low,
    /// Catch-all for severity strings this client does not recognize.
    #[serde(other)]
    Unknown,
}

/// Risk annotation attached to one asset for the current run.
///
/// At most one per asset; duplicates resolve last-write-wins in the
/// correlation map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Risk {
    /// References `Asset::id`; tolerated when it does not resolve.
    pub asset_id: String,
    /// Assessed severity.
    pub risk_level: RiskLevel,
    /// Why the engine flagged the asset.
    pub reason: String,
    /// What happens if the risk materializes.
    pub expected_impact: String,
}

/// Urgency of a mitigation action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// Can wait for a convenient window.
    Low,
    /// Should happen within the scenario window.
    Medium,
    /// Needed before the event peaks.
    High,
}

impl Urgency {
    /// Wire/display name.
    pub fn label(self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }
}

/// One recommended action from the mitigation planner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MitigationAction {
    /// Asset requiring relief.
    pub asset_id: String,
    /// Planner vocabulary, e.g. "deploy_mobile_generator".
    pub action_type: String,
    /// How soon the action is needed.
    pub urgency: Urgency,
    /// Technical justification from the planner.
    pub justification: String,
    /// When the action should take effect, RFC 3339.
    pub target_time: DateTime<Utc>,
}

/// Plan returned by the mitigation planner. Doubles as the wire response.
///
/// Discarded on a new scenario run and on reset.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MitigationPlan {
    /// Executive summary of the strategy.
    #[serde(default)]
    pub summary_text: String,
    /// Recommended actions, in planner order.
    #[serde(default)]
    pub mitigation_actions: Vec<MitigationAction>,
}

/// Outcome of one dispatch attempt against the service network.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DispatchStatus {
    /// Providers were searched; no confirmation yet.
    Searched,
    /// A provider confirmed the order.
    Confirmed,
    /// The flow ended without a confirmation.
    Failed,
}

impl DispatchStatus {
    /// Wire/display name.
    pub fn label(self) -> &'static str {
        match self {
            DispatchStatus::Searched => "searched",
            DispatchStatus::Confirmed => "confirmed",
            DispatchStatus::Failed => "failed",
        }
    }
}

/// One entry of the dispatch activity log, in response order.
///
/// The log is append-replace: a new dispatch call replaces it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DispatchLogEntry {
    /// Asset the dispatched action targets.
    pub asset_id: String,
    /// Outcome of the flow for this action.
    pub status: DispatchStatus,
    /// Service category that was searched for.
    pub service_type: String,
    /// Matched provider, when one was found.
    #[serde(default)]
    pub provider: Option<String>,
}

/// The three ordered phases of the operator workflow.
///
/// Advances forward on success only; an explicit reset is the single
/// transition back to `Simulation`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStage {
    /// Configure and run a scenario.
    #[default]
    Simulation,
    /// Review risks and the mitigation plan.
    RiskAssessment,
    /// Review the dispatch activity log.
    DispatchNetwork,
}

impl WorkflowStage {
    /// All stages in workflow order.
    pub const ALL: [WorkflowStage; 3] = [
        WorkflowStage::Simulation,
        WorkflowStage::RiskAssessment,
        WorkflowStage::DispatchNetwork,
    ];

    /// 1-based position in the step indicator.
    pub fn number(self) -> usize {
        match self {
            WorkflowStage::Simulation => 1,
            WorkflowStage::RiskAssessment => 2,
            WorkflowStage::DispatchNetwork => 3,
        }
    }

    /// Human label used by the panels.
    pub fn label(self) -> &'static str {
        match self {
            WorkflowStage::Simulation => "Simulation",
            WorkflowStage::RiskAssessment => "Risk Assessment",
            WorkflowStage::DispatchNetwork => "Dispatch Network",
        }
    }
}
