//! Wire-shape tests for the core data model and contracts.

use resilience_core::api::{DispatchResponse, ScenarioRunResponse};
use resilience_core::model::{
    Asset, DispatchLogEntry, DispatchStatus, EventType, MitigationPlan, RiskLevel, Urgency,
    WorkflowStage,
};

#[test]
fn test_event_type_serde() {
    let heatwave = EventType::Heatwave;
    let serialized = serde_json::to_string(&heatwave).unwrap();
    assert_eq!(serialized, r#""heatwave""#);
    let deserialized: EventType = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized, heatwave);
}

#[test]
fn test_risk_level_serde() {
    assert_eq!(
        serde_json::to_string(&RiskLevel::Critical).unwrap(),
        r#""CRITICAL""#
    );
    let parsed: RiskLevel = serde_json::from_str(r#""HIGH""#).unwrap();
    assert_eq!(parsed, RiskLevel::High);
}

#[test]
fn test_risk_level_unknown_string_degrades() {
    let parsed: RiskLevel = serde_json::from_str(r#""SEVERE""#).unwrap();
    assert_eq!(parsed, RiskLevel::Unknown);
}

#[test]
fn test_risk_level_orders_most_severe_first() {
    let mut levels = vec![
        RiskLevel::Low,
        RiskLevel::Critical,
        RiskLevel::Medium,
        RiskLevel::High,
    ];
    levels.sort();
    assert_eq!(
        levels,
        vec![
            RiskLevel::Critical,
            RiskLevel::High,
            RiskLevel::Medium,
            RiskLevel::Low,
        ]
    );
}

#[test]
fn test_workflow_stage_ordering() {
    assert!(WorkflowStage::Simulation < WorkflowStage::RiskAssessment);
    assert!(WorkflowStage::RiskAssessment < WorkflowStage::DispatchNetwork);
    assert_eq!(WorkflowStage::default(), WorkflowStage::Simulation);
}

#[test]
fn test_workflow_stage_serde() {
    assert_eq!(
        serde_json::to_string(&WorkflowStage::RiskAssessment).unwrap(),
        r#""risk_assessment""#
    );
}

#[test]
fn test_scenario_response_missing_fields_default_empty() {
    let resp: ScenarioRunResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.assets.is_empty());
    assert!(resp.risks.is_empty());
}

#[test]
fn test_scenario_response_ignores_unknown_fields() {
    let resp: ScenarioRunResponse =
        serde_json::from_str(r#"{"scenario": {"echo": true}, "assets": [], "risks": []}"#).unwrap();
    assert!(resp.assets.is_empty());
}

#[test]
fn test_asset_without_coordinates_deserializes() {
    let asset: Asset = serde_json::from_str(
        r#"{"id":"sub_1","name":"Substation A","type":"substation","capacity_kw":2500.0,"criticality":"high"}"#,
    )
    .unwrap();
    assert!(asset.lat.is_nan());
    assert!(asset.lon.is_nan());
    assert_eq!(asset.kind, "substation");
}

#[test]
fn test_dispatch_response_tolerates_missing_log() {
    let resp: DispatchResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.log.is_empty());
}

#[test]
fn test_dispatch_log_entry_provider_optional() {
    let entry: DispatchLogEntry = serde_json::from_str(
        r#"{"asset_id":"sub_1","status":"searched","service_type":"deploy_mobile_generator"}"#,
    )
    .unwrap();
    assert_eq!(entry.status, DispatchStatus::Searched);
    assert!(entry.provider.is_none());
}

#[test]
fn test_mitigation_plan_round_trip() {
    let json = r#"{
        "summary_text": "Initiating peak shaving via battery discharge.",
        "mitigation_actions": [{
            "asset_id": "sub_1",
            "action_type": "dispatch_battery_discharge",
            "urgency": "high",
            "justification": "Projected load above 110% capacity",
            "target_time": "2025-11-26T14:00:00Z"
        }]
    }"#;
    let plan: MitigationPlan = serde_json::from_str(json).unwrap();
    assert_eq!(plan.mitigation_actions.len(), 1);
    assert_eq!(plan.mitigation_actions[0].urgency, Urgency::High);

    let reserialized = serde_json::to_string(&plan).unwrap();
    let reparsed: MitigationPlan = serde_json::from_str(&reserialized).unwrap();
    assert_eq!(reparsed, plan);
}

#[test]
fn test_mitigation_plan_missing_actions_default_empty() {
    let plan: MitigationPlan =
        serde_json::from_str(r#"{"summary_text": "nothing to do"}"#).unwrap();
    assert!(plan.mitigation_actions.is_empty());
}
