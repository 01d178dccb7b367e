//! Database model type aliases and DTO conversions.
//!
//! The geometry and facilities columns store JSON text, so conversions from
//! stored rows to wire DTOs are fallible and surface `serde_json::Error` when
//! a row no longer parses.

use crate::model::{
    emergency::EmergencyRequestDto,
    geofence::{DisasterZoneDto, EvacuationCenterDto, EvacuationRouteDto, RoutePoint},
};

/// Type alias for an emergency request database row.
pub type EmergencyRequestModel = entity::emergency_request::Model;

/// Type alias for a disaster zone database row.
pub type DisasterZoneModel = entity::disaster_zone::Model;

/// Type alias for an evacuation route database row.
pub type EvacuationRouteModel = entity::evacuation_route::Model;

/// Type alias for an evacuation center database row.
pub type EvacuationCenterModel = entity::evacuation_center::Model;

impl From<EmergencyRequestModel> for EmergencyRequestDto {
    fn from(model: EmergencyRequestModel) -> Self {
        Self {
            id: model.id,
            barangay_id: model.barangay_id,
            reporter_id: model.reporter_id,
            request_type: model.request_type,
            status: model.status,
            latitude: model.latitude,
            longitude: model.longitude,
            details: model.details,
            created_at: model.created_at,
        }
    }
}

impl TryFrom<DisasterZoneModel> for DisasterZoneDto {
    type Error = serde_json::Error;

    fn try_from(model: DisasterZoneModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            barangay_id: model.barangay_id,
            zone_name: model.zone_name,
            zone_type: model.zone_type,
            risk_level: model.risk_level,
            polygon_coords: serde_json::from_str(&model.polygon_coords)?,
            notes: model.notes,
            created_at: model.created_at,
        })
    }
}

impl TryFrom<EvacuationRouteModel> for EvacuationRouteDto {
    type Error = serde_json::Error;

    fn try_from(model: EvacuationRouteModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            barangay_id: model.barangay_id,
            route_name: model.route_name,
            route_coords: serde_json::from_str(&model.route_coords)?,
            start_point: RoutePoint {
                lat: model.start_lat,
                lng: model.start_lng,
                description: model.start_description,
            },
            end_point: RoutePoint {
                lat: model.end_lat,
                lng: model.end_lng,
                description: model.end_description,
            },
            distance_km: model.distance_km,
            estimated_time_minutes: model.estimated_time_minutes,
            created_at: model.created_at,
        })
    }
}

impl TryFrom<EvacuationCenterModel> for EvacuationCenterDto {
    type Error = serde_json::Error;

    fn try_from(model: EvacuationCenterModel) -> Result<Self, Self::Error> {
        let facilities = match model.facilities {
            Some(json) => serde_json::from_str(&json)?,
            None => Vec::new(),
        };

        Ok(Self {
            id: model.id,
            barangay_id: model.barangay_id,
            name: model.name,
            address: model.address,
            latitude: model.latitude,
            longitude: model.longitude,
            capacity: model.capacity,
            current_occupancy: model.current_occupancy,
            status: model.status,
            contact_person: model.contact_person,
            contact_phone: model.contact_phone,
            facilities,
            notes: model.notes,
            created_at: model.created_at,
        })
    }
}
