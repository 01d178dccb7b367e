//! Tests for the disaster zone endpoints.

use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use bantay::{
    model::geofence::CreateDisasterZoneDto,
    server::{
        controller::{
            geofence::zone::{create_disaster_zone, delete_disaster_zone, get_disaster_zones},
            BarangayParams,
        },
        model::app::AppState,
    },
};
use bantay_test_utils::{fixtures, test_setup_with_tables, TestError, TestSetup};

fn zone_dto(polygon_json: &str) -> CreateDisasterZoneDto {
    CreateDisasterZoneDto {
        barangay_id: 1,
        zone_name: "Riverside flood basin".to_string(),
        zone_type: "flood".to_string(),
        risk_level: "high".to_string(),
        polygon_coords: serde_json::from_str(polygon_json).unwrap(),
        notes: None,
    }
}

/// Expect 200 when listing zones
#[tokio::test]
async fn list_zones() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::DisasterZone)?;
    let state: AppState = test.state();

    fixtures::geofence::insert_zone(&test.db, 1, "Zone A").await?;

    let result =
        get_disaster_zones(State(state), Query(BarangayParams { barangay_id: 1 })).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 201 for a valid polygon
#[tokio::test]
async fn create_valid_zone() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::DisasterZone)?;
    let state: AppState = test.state();

    let result = create_disaster_zone(
        State(state),
        Json(zone_dto(fixtures::geofence::TEST_POLYGON_JSON)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 400 for an unclosed ring, caught before any insert
#[tokio::test]
async fn reject_unclosed_ring() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::DisasterZone)?;
    let state: AppState = test.state();

    let open_ring =
        r#"{"type":"Polygon","coordinates":[[[121.0,14.6],[121.1,14.6],[121.1,14.7]]]}"#;
    let result = create_disaster_zone(State(state), Json(zone_dto(open_ring))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 204 on delete and 404 for a second attempt
#[tokio::test]
async fn delete_zone_then_miss() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::DisasterZone)?;
    let state: AppState = test.state();

    let zone = fixtures::geofence::insert_zone(&test.db, 1, "Zone A").await?;

    let result = delete_disaster_zone(State(state.clone()), Path(zone.id)).await;
    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let result = delete_disaster_zone(State(state), Path(zone.id)).await;
    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
