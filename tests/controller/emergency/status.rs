//! Tests for the request status update endpoint.

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use bantay::{
    model::emergency::{RequestStatus, UpdateStatusDto},
    server::{controller::emergency::update_request_status, model::app::AppState},
};
use bantay_test_utils::{fixtures, test_setup_with_tables, TestError, TestSetup};

/// Expect 200 and a broadcast update event for a known request
#[tokio::test]
async fn update_known_request() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EmergencyRequest)?;
    let state: AppState = test.state();
    let mut subscriber = state.events.subscribe();

    fixtures::emergency::insert_pending_request(&test.db, "req-1", 1).await?;

    let result = update_request_status(
        State(state),
        Path("req-1".to_string()),
        Json(UpdateStatusDto {
            status: RequestStatus::InProgress,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let event = subscriber.try_recv().unwrap();
    assert_eq!(event.barangay_id, 1);

    Ok(())
}

/// Expect 404 for an id that does not exist
#[tokio::test]
async fn update_unknown_request() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EmergencyRequest)?;
    let state: AppState = test.state();

    let result = update_request_status(
        State(state),
        Path("ghost".to_string()),
        Json(UpdateStatusDto {
            status: RequestStatus::Responded,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 when the required table does not exist
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let state: AppState = test.state();

    let result = update_request_status(
        State(state),
        Path("req-1".to_string()),
        Json(UpdateStatusDto {
            status: RequestStatus::Responded,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
