use serde::{Deserialize, Serialize};

/// Table names carried on change events.
pub const EMERGENCY_REQUEST_TABLE: &str = "emergency_request";
pub const DISASTER_ZONE_TABLE: &str = "disaster_zone";
pub const EVACUATION_ROUTE_TABLE: &str = "evacuation_route";
pub const EVACUATION_CENTER_TABLE: &str = "evacuation_center";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum ChangeEventType {
    Insert,
    Update,
    Delete,
}

/// A row-level change notification pushed to live subscribers.
///
/// `new` carries the row after an insert or update, `old` the row before an
/// update or delete. Payloads stay untyped JSON here; subscribers
/// deserialize into the DTO for the table they care about.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ChangeEvent {
    pub table: String,
    pub event_type: ChangeEventType,
    /// Scope filter: subscribers only receive events for their barangay.
    pub barangay_id: i32,
    pub new: Option<serde_json::Value>,
    pub old: Option<serde_json::Value>,
}

impl ChangeEvent {
    pub fn insert(table: &str, barangay_id: i32, new: serde_json::Value) -> Self {
        Self {
            table: table.to_string(),
            event_type: ChangeEventType::Insert,
            barangay_id,
            new: Some(new),
            old: None,
        }
    }

    pub fn update(
        table: &str,
        barangay_id: i32,
        new: serde_json::Value,
        old: Option<serde_json::Value>,
    ) -> Self {
        Self {
            table: table.to_string(),
            event_type: ChangeEventType::Update,
            barangay_id,
            new: Some(new),
            old,
        }
    }

    pub fn delete(table: &str, barangay_id: i32, old: serde_json::Value) -> Self {
        Self {
            table: table.to_string(),
            event_type: ChangeEventType::Delete,
            barangay_id,
            new: None,
            old: Some(old),
        }
    }
}
