//! Predefined scenarios, the quick-start presets of the scenario form.

use chrono::Utc;
use resilience_core::model::{EventType, Scenario};

/// A predefined scenario preset.
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub event_type: EventType,
    pub duration_hours: u32,
}

impl Template {
    /// Instantiate with the submission time as start date.
    pub fn scenario_now(&self) -> Scenario {
        Scenario {
            location: self.location.to_string(),
            event_type: self.event_type,
            start_date: Utc::now(),
            duration_hours: self.duration_hours,
        }
    }
}

/// The built-in presets.
pub const TEMPLATES: [Template; 3] = [
    Template {
        id: "london_heatwave_3d",
        name: "London Heatwave - 3 Days",
        location: "London",
        event_type: EventType::Heatwave,
        duration_hours: 72,
    },
    Template {
        id: "london_flood_24h",
        name: "London Flood - 24 Hours",
        location: "London",
        event_type: EventType::Flood,
        duration_hours: 24,
    },
    Template {
        id: "london_heatwave_5d",
        name: "London Heatwave - 5 Days",
        location: "London",
        event_type: EventType::Heatwave,
        duration_hours: 120,
    },
];

/// Look up a preset by id.
pub fn by_id(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}
