use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::error::TestError;

/// A valid closed triangle over Metro Manila in GeoJSON Polygon form.
pub const TEST_POLYGON_JSON: &str =
    r#"{"type":"Polygon","coordinates":[[[121.0,14.6],[121.1,14.6],[121.1,14.7],[121.0,14.6]]]}"#;

/// An open two-point path in [lng, lat] order.
pub const TEST_ROUTE_JSON: &str = "[[121.0,14.6],[121.05,14.65]]";

pub async fn insert_zone(
    db: &sea_orm::DatabaseConnection,
    barangay_id: i32,
    zone_name: &str,
) -> Result<entity::disaster_zone::Model, TestError> {
    let zone = entity::disaster_zone::ActiveModel {
        barangay_id: ActiveValue::Set(barangay_id),
        zone_name: ActiveValue::Set(zone_name.to_string()),
        zone_type: ActiveValue::Set("flood".to_string()),
        risk_level: ActiveValue::Set("moderate".to_string()),
        polygon_coords: ActiveValue::Set(TEST_POLYGON_JSON.to_string()),
        notes: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(zone.insert(db).await?)
}

pub async fn insert_route(
    db: &sea_orm::DatabaseConnection,
    barangay_id: i32,
    route_name: &str,
) -> Result<entity::evacuation_route::Model, TestError> {
    let route = entity::evacuation_route::ActiveModel {
        barangay_id: ActiveValue::Set(barangay_id),
        route_name: ActiveValue::Set(route_name.to_string()),
        route_coords: ActiveValue::Set(TEST_ROUTE_JSON.to_string()),
        start_lat: ActiveValue::Set(14.6),
        start_lng: ActiveValue::Set(121.0),
        start_description: ActiveValue::Set(Some("Barangay hall".to_string())),
        end_lat: ActiveValue::Set(14.65),
        end_lng: ActiveValue::Set(121.05),
        end_description: ActiveValue::Set(Some("Evacuation center".to_string())),
        distance_km: ActiveValue::Set(Some(1.2)),
        estimated_time_minutes: ActiveValue::Set(Some(15)),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(route.insert(db).await?)
}

pub async fn insert_center(
    db: &sea_orm::DatabaseConnection,
    barangay_id: i32,
    name: &str,
) -> Result<entity::evacuation_center::Model, TestError> {
    let center = entity::evacuation_center::ActiveModel {
        barangay_id: ActiveValue::Set(barangay_id),
        name: ActiveValue::Set(name.to_string()),
        address: ActiveValue::Set("123 Sampaguita St".to_string()),
        latitude: ActiveValue::Set(Some(14.6)),
        longitude: ActiveValue::Set(Some(121.0)),
        capacity: ActiveValue::Set(200),
        current_occupancy: ActiveValue::Set(0),
        status: ActiveValue::Set("available".to_string()),
        contact_person: ActiveValue::Set(None),
        contact_phone: ActiveValue::Set(None),
        facilities: ActiveValue::Set(Some(r#"["water","electricity"]"#.to_string())),
        notes: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(center.insert(db).await?)
}
