use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Request types offered by the reporting flow. The column itself is
/// free-form, so these are suggestions rather than an exhaustive vocabulary.
pub const KNOWN_REQUEST_TYPES: &[&str] = &[
    "Fire",
    "Medical Emergency",
    "Flood",
    "Infrastructure Damage",
    "Rescue Operation",
];

/// Lifecycle states of an emergency request.
///
/// The server does not enforce linear progression, so a request may jump
/// straight from Pending to Responded. Clients must tolerate out-of-order
/// arrival of status updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum RequestStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Responded,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Responded => "Responded",
        }
    }

    /// Parses a wire status string, rejecting anything outside the vocabulary.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(Self::Pending),
            "In Progress" => Some(Self::InProgress),
            "Responded" => Some(Self::Responded),
            _ => None,
        }
    }

    /// Every status in workflow order, for select controls.
    pub fn all() -> [Self; 3] {
        [Self::Pending, Self::InProgress, Self::Responded]
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Triage rank for a raw status string: Pending sorts first, unknown
/// statuses last. Unknown values can arrive from the live stream and must
/// not panic the sort.
pub fn status_priority(status: &str) -> u8 {
    match status {
        "Pending" => 0,
        "In Progress" => 1,
        "Responded" => 2,
        _ => 3,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct EmergencyRequestDto {
    pub id: String,
    pub barangay_id: i32,
    pub reporter_id: String,
    pub request_type: String,
    pub status: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub details: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Intake payload for a new report. The server assigns the id, the Pending
/// status, and the creation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateEmergencyRequestDto {
    pub barangay_id: i32,
    pub reporter_id: String,
    pub request_type: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub details: Option<String>,
}

/// Payload for the single-column status update call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateStatusDto {
    pub status: RequestStatus,
}
