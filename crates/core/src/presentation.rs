//! Severity → visual token mapping, shared by the map and the risk list.
//!
//! Total over every enumerated level plus absence: an asset with no risk, or
//! a severity string the client does not recognize, always gets the neutral
//! token.

use crate::model::RiskLevel;

/// Marker color for critical risk.
pub const COLOR_CRITICAL: &str = "#e53e3e";
/// Marker color for high risk.
pub const COLOR_HIGH: &str = "#ed8936";
/// Marker color for medium risk.
pub const COLOR_MEDIUM: &str = "#ecc94b";
/// Marker color for low risk.
pub const COLOR_LOW: &str = "#48bb78";
/// Neutral token for assets with no assessed or recognizable risk.
pub const COLOR_NO_RISK: &str = "#cbd5e0";

/// Legend rows for the map panel, most severe first.
pub const LEGEND: [(&str, &str); 5] = [
    ("Critical", COLOR_CRITICAL),
    ("High", COLOR_HIGH),
    ("Medium", COLOR_MEDIUM),
    ("Low", COLOR_LOW),
    ("No Risk", COLOR_NO_RISK),
];

/// Color token for a marker or badge.
pub fn risk_color(level: Option<RiskLevel>) -> &'static str {
    match level {
        Some(RiskLevel::Critical) => COLOR_CRITICAL,
        Some(RiskLevel::High) => COLOR_HIGH,
        Some(RiskLevel::Medium) => COLOR_MEDIUM,
        Some(RiskLevel::Low) => COLOR_LOW,
        Some(RiskLevel::Unknown) | None => COLOR_NO_RISK,
    }
}

/// Badge text shown next to an asset.
pub fn risk_label(level: Option<RiskLevel>) -> &'static str {
    match level {
        Some(RiskLevel::Critical) => "CRITICAL",
        Some(RiskLevel::High) => "HIGH",
        Some(RiskLevel::Medium) => "MEDIUM",
        Some(RiskLevel::Low) => "LOW",
        Some(RiskLevel::Unknown) | None => "NO RISK",
    }
}

/// Relative marker weight, heavier for more severe risk.
pub fn severity_weight(level: Option<RiskLevel>) -> u8 {
    match level {
        Some(RiskLevel::Critical) => 4,
        Some(RiskLevel::High) => 3,
        Some(RiskLevel::Medium) => 2,
        Some(RiskLevel::Low) => 1,
        Some(RiskLevel::Unknown) | None => 0,
    }
}
