//! Tests for the emergency request list and intake endpoints.

use axum::{
    extract::{Json, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use bantay::{
    model::emergency::CreateEmergencyRequestDto,
    server::{
        controller::{
            emergency::{create_emergency_request, get_emergency_requests},
            BarangayParams,
        },
        model::app::AppState,
    },
};
use bantay_test_utils::{fixtures, test_setup_with_tables, TestError, TestSetup};

fn report(barangay_id: i32) -> CreateEmergencyRequestDto {
    CreateEmergencyRequestDto {
        barangay_id,
        reporter_id: "resident-7".to_string(),
        request_type: "Fire".to_string(),
        latitude: Some(14.6),
        longitude: Some(121.0),
        details: Some("Near the covered court".to_string()),
    }
}

/// Expect 200 with an empty list when the barangay has no requests
#[tokio::test]
async fn list_empty_barangay() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EmergencyRequest)?;
    let state: AppState = test.state();

    let result = get_emergency_requests(
        State(state),
        Query(BarangayParams { barangay_id: 1 }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 200 when the barangay has stored requests
#[tokio::test]
async fn list_with_rows() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EmergencyRequest)?;
    let state: AppState = test.state();

    fixtures::emergency::insert_pending_request(&test.db, "req-1", 1).await?;
    fixtures::emergency::insert_pending_request(&test.db, "req-2", 1).await?;

    let result = get_emergency_requests(
        State(state),
        Query(BarangayParams { barangay_id: 1 }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 201 when filing a new report
#[tokio::test]
async fn create_report() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EmergencyRequest)?;
    let state: AppState = test.state();

    let result = create_emergency_request(State(state), Json(report(1))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 500 when the required table does not exist
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let state: AppState = test.state();

    let result = create_emergency_request(State(state), Json(report(1))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
