//! Tests for the evacuation center endpoints.

use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use bantay::{
    model::geofence::{
        CenterStatus, CreateEvacuationCenterDto, UpdateCenterOccupancyDto, UpdateCenterStatusDto,
    },
    server::{
        controller::{
            geofence::center::{
                create_evacuation_center, delete_evacuation_center, get_evacuation_centers,
                update_center_occupancy, update_center_status,
            },
            BarangayParams,
        },
        model::app::AppState,
    },
};
use bantay_test_utils::{fixtures, test_setup_with_tables, TestError, TestSetup};

fn center_dto(capacity: i32, current_occupancy: i32) -> CreateEvacuationCenterDto {
    CreateEvacuationCenterDto {
        barangay_id: 1,
        name: "Covered court".to_string(),
        address: "123 Sampaguita St".to_string(),
        latitude: Some(14.6),
        longitude: Some(121.0),
        capacity,
        current_occupancy,
        status: CenterStatus::Available,
        contact_person: None,
        contact_phone: None,
        facilities: vec!["water".to_string()],
        notes: None,
    }
}

/// Expect 200 when listing centers
#[tokio::test]
async fn list_centers() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EvacuationCenter)?;
    let state: AppState = test.state();

    fixtures::geofence::insert_center(&test.db, 1, "Covered court").await?;

    let result =
        get_evacuation_centers(State(state), Query(BarangayParams { barangay_id: 1 })).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 201 for a valid center
#[tokio::test]
async fn create_valid_center() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EvacuationCenter)?;
    let state: AppState = test.state();

    let result = create_evacuation_center(State(state), Json(center_dto(200, 0))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 400 for a negative capacity
#[tokio::test]
async fn reject_negative_capacity() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EvacuationCenter)?;
    let state: AppState = test.state();

    let result = create_evacuation_center(State(state), Json(center_dto(-1, 0))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 when moving a center between statuses
#[tokio::test]
async fn update_status() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EvacuationCenter)?;
    let state: AppState = test.state();

    let center = fixtures::geofence::insert_center(&test.db, 1, "Covered court").await?;

    let result = update_center_status(
        State(state),
        Path(center.id),
        Json(UpdateCenterStatusDto {
            status: CenterStatus::Maintenance,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 200 for a valid occupancy and 400 for a negative one
#[tokio::test]
async fn update_occupancy() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EvacuationCenter)?;
    let state: AppState = test.state();

    let center = fixtures::geofence::insert_center(&test.db, 1, "Covered court").await?;

    let result = update_center_occupancy(
        State(state.clone()),
        Path(center.id),
        Json(UpdateCenterOccupancyDto {
            current_occupancy: 180,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let result = update_center_occupancy(
        State(state),
        Path(center.id),
        Json(UpdateCenterOccupancyDto {
            current_occupancy: -1,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 204 on delete and 404 for an unknown id
#[tokio::test]
async fn delete_center_then_miss() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EvacuationCenter)?;
    let state: AppState = test.state();

    let center = fixtures::geofence::insert_center(&test.db, 1, "Covered court").await?;

    let result = delete_evacuation_center(State(state.clone()), Path(center.id)).await;
    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let result = delete_evacuation_center(State(state), Path(center.id)).await;
    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
