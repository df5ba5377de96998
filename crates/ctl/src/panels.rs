//! Text views over the workflow state. Pure: state in, string out.
//!
//! Panels read one snapshot per render and never mutate it; all actions go
//! through the command loop in `main`.

use std::fmt::Write as _;

use resilience_core::geo;
use resilience_core::model::{Risk, WorkflowStage};
use resilience_core::presentation;
use resilience_workflow::WorkflowState;

use crate::templates::TEMPLATES;

/// Full view for the current stage: step indicator plus the stage panel.
pub fn render(state: &WorkflowState) -> String {
    let mut out = String::new();
    out.push_str(&step_indicator(state));
    out.push('\n');
    match state.stage {
        WorkflowStage::Simulation => out.push_str(&scenario_panel(state)),
        WorkflowStage::RiskAssessment => out.push_str(&risk_panel(state)),
        WorkflowStage::DispatchNetwork => out.push_str(&dispatch_panel(state)),
    }
    out
}

/// One line marking completed, active, and in-flight stages.
pub fn step_indicator(state: &WorkflowState) -> String {
    let in_flight = [
        state.busy.simulation,
        state.busy.mitigation,
        state.busy.dispatch,
    ];
    let mut out = String::new();
    for (stage, busy) in WorkflowStage::ALL.into_iter().zip(in_flight) {
        let mark = if stage == state.stage {
            '>'
        } else if stage < state.stage {
            'x'
        } else {
            ' '
        };
        let _ = write!(
            out,
            "[{mark}] {}. {}{}   ",
            stage.number(),
            stage.label(),
            if busy { " (working)" } else { "" }
        );
    }
    out.truncate(out.trim_end().len());
    out.push('\n');
    out
}

/// The preset list shown by `templates` and on the scenario panel.
pub fn templates_panel() -> String {
    let mut out = String::from("Templates:\n");
    for t in &TEMPLATES {
        let _ = writeln!(
            out,
            "  run {:<20} {} ({}, {}h)",
            t.id,
            t.name,
            t.event_type.label(),
            t.duration_hours
        );
    }
    out
}

fn scenario_panel(state: &WorkflowState) -> String {
    let mut out = String::from("Scenario Configuration\n----------------------\n");
    out.push_str(&templates_panel());
    out.push_str("Custom: run <location> <heatwave|flood> <hours> [start-rfc3339]\n");
    if let Some(sc) = &state.scenario {
        let _ = writeln!(
            out,
            "\nSubmitted: {} {} for {}h starting {}",
            sc.location,
            sc.event_type.label(),
            sc.duration_hours,
            sc.start_date.to_rfc3339()
        );
    }
    out
}

fn risk_panel(state: &WorkflowState) -> String {
    let mut out = String::from("Risk Assessment\n---------------\n");
    if state.risks.is_empty() {
        out.push_str("No risks detected. Run a scenario to see results.\n");
        return out;
    }

    let mut risks: Vec<&Risk> = state.risks.iter().collect();
    risks.sort_by_key(|r| r.risk_level);
    let _ = writeln!(out, "Affected assets ({}):", risks.len());
    for r in risks {
        let _ = writeln!(
            out,
            "  [{:<8}] {}  {}",
            presentation::risk_label(Some(r.risk_level)),
            r.asset_id,
            r.reason
        );
        let _ = writeln!(out, "             impact: {}", r.expected_impact);
    }
    out.push('\n');

    match &state.plan {
        None => out.push_str("No mitigation plan yet. `mitigate` requests one.\n"),
        Some(plan) => {
            out.push_str("AI mitigation plan:\n");
            let _ = writeln!(out, "  {}", plan.summary_text);
            if plan.mitigation_actions.is_empty() {
                out.push_str("  (no actions recommended)\n");
            } else {
                for a in &plan.mitigation_actions {
                    let _ = writeln!(
                        out,
                        "  - {}  {}  urgency={}  target={}",
                        a.asset_id,
                        a.action_type,
                        a.urgency.label(),
                        a.target_time.to_rfc3339()
                    );
                    let _ = writeln!(out, "      {}", a.justification);
                }
                out.push_str("`dispatch` submits these actions to the service network.\n");
            }
        }
    }
    out
}

fn dispatch_panel(state: &WorkflowState) -> String {
    let mut out = String::from("Dispatch Network Activity\n-------------------------\n");
    if state.log.is_empty() {
        out.push_str("No dispatch activity recorded.\n");
        return out;
    }
    let _ = writeln!(
        out,
        "  {:<12} {:<28} {:<24} {}",
        "asset", "service", "provider", "status"
    );
    for entry in &state.log {
        let _ = writeln!(
            out,
            "  {:<12} {:<28} {:<24} {}",
            entry.asset_id,
            entry.service_type,
            entry.provider.as_deref().unwrap_or("-"),
            entry.status.label()
        );
    }
    out
}

/// Viewport summary, per-asset markers with correlated risk, and legend.
pub fn map_panel(state: &WorkflowState) -> String {
    let viewport = geo::fit_viewport(&state.assets);
    let by_risk = geo::correlate(&state.assets, &state.risks);

    let mut out = String::from("Asset Map\n---------\n");
    let _ = writeln!(
        out,
        "view: center {:.4},{:.4} zoom {:.1}",
        viewport.center.lat, viewport.center.lon, viewport.zoom
    );
    if let Some(b) = viewport.bounds {
        let _ = writeln!(
            out,
            "bounds: {:.4},{:.4} .. {:.4},{:.4}",
            b.south, b.west, b.north, b.east
        );
    }

    if state.assets.is_empty() {
        out.push_str("No assets loaded.\n");
    }

    let mut unpositioned = Vec::new();
    for asset in &state.assets {
        let level = by_risk.get(asset.id.as_str()).map(|r| r.risk_level);
        match geo::asset_position(asset) {
            Some(p) => {
                let _ = writeln!(
                    out,
                    "  o {:<12} {:<24} ({:.4}, {:.4})  [{} {}]  {} kW",
                    asset.id,
                    asset.name,
                    p.lat,
                    p.lon,
                    presentation::risk_label(level),
                    presentation::risk_color(level),
                    asset.capacity_kw
                );
            }
            None => unpositioned.push(asset.id.as_str()),
        }
    }
    if !unpositioned.is_empty() {
        let _ = writeln!(out, "  unpositioned: {}", unpositioned.join(", "));
    }

    out.push_str("legend:");
    for (label, color) in presentation::LEGEND {
        let _ = write!(out, "  {label} {color}");
    }
    out.push('\n');
    out
}
