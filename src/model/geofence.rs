use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::geo::{LngLat, Polygon};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DisasterZoneDto {
    pub id: i32,
    pub barangay_id: i32,
    pub zone_name: String,
    pub zone_type: String,
    pub risk_level: String,
    pub polygon_coords: Polygon,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateDisasterZoneDto {
    pub barangay_id: i32,
    pub zone_name: String,
    pub zone_type: String,
    pub risk_level: String,
    pub polygon_coords: Polygon,
    pub notes: Option<String>,
}

/// A route endpoint: coordinate plus optional human description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RoutePoint {
    pub lat: f64,
    pub lng: f64,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct EvacuationRouteDto {
    pub id: i32,
    pub barangay_id: i32,
    pub route_name: String,
    /// Ordered, non-closed [lng, lat] sequence.
    #[cfg_attr(feature = "server", schema(value_type = Vec<Vec<f64>>))]
    pub route_coords: Vec<LngLat>,
    pub start_point: RoutePoint,
    pub end_point: RoutePoint,
    pub distance_km: Option<f64>,
    pub estimated_time_minutes: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateEvacuationRouteDto {
    pub barangay_id: i32,
    pub route_name: String,
    #[cfg_attr(feature = "server", schema(value_type = Vec<Vec<f64>>))]
    pub route_coords: Vec<LngLat>,
    pub start_point: RoutePoint,
    pub end_point: RoutePoint,
    pub distance_km: Option<f64>,
    pub estimated_time_minutes: Option<i32>,
}

/// Operational states of an evacuation center. Status is operator-editable
/// independently of occupancy; a center at capacity is not automatically
/// marked full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum CenterStatus {
    Available,
    Full,
    Closed,
    Maintenance,
}

impl CenterStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "available" => Some(Self::Available),
            "full" => Some(Self::Full),
            "closed" => Some(Self::Closed),
            "maintenance" => Some(Self::Maintenance),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Full => "full",
            Self::Closed => "closed",
            Self::Maintenance => "maintenance",
        }
    }
}

impl std::fmt::Display for CenterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct EvacuationCenterDto {
    pub id: i32,
    pub barangay_id: i32,
    pub name: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub capacity: i32,
    pub current_occupancy: i32,
    pub status: String,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
    pub facilities: Vec<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateEvacuationCenterDto {
    pub barangay_id: i32,
    pub name: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub capacity: i32,
    pub current_occupancy: i32,
    pub status: CenterStatus,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub facilities: Vec<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateCenterStatusDto {
    pub status: CenterStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateCenterOccupancyDto {
    pub current_occupancy: i32,
}
