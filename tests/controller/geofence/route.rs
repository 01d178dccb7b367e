//! Tests for the evacuation route endpoints.

use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use bantay::{
    model::geofence::{CreateEvacuationRouteDto, RoutePoint},
    server::{
        controller::{
            geofence::route::{
                create_evacuation_route, delete_evacuation_route, get_evacuation_routes,
            },
            BarangayParams,
        },
        model::app::AppState,
    },
};
use bantay_test_utils::{fixtures, test_setup_with_tables, TestError, TestSetup};

fn route_dto(route_coords: Vec<[f64; 2]>) -> CreateEvacuationRouteDto {
    CreateEvacuationRouteDto {
        barangay_id: 1,
        route_name: "Hall to gym".to_string(),
        route_coords,
        start_point: RoutePoint {
            lat: 14.6,
            lng: 121.0,
            description: Some("Barangay hall".to_string()),
        },
        end_point: RoutePoint {
            lat: 14.65,
            lng: 121.05,
            description: None,
        },
        distance_km: Some(1.2),
        estimated_time_minutes: Some(15),
    }
}

/// Expect 200 when listing routes
#[tokio::test]
async fn list_routes() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EvacuationRoute)?;
    let state: AppState = test.state();

    fixtures::geofence::insert_route(&test.db, 1, "Route A").await?;

    let result =
        get_evacuation_routes(State(state), Query(BarangayParams { barangay_id: 1 })).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 201 for a route with at least two points
#[tokio::test]
async fn create_valid_route() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EvacuationRoute)?;
    let state: AppState = test.state();

    let result = create_evacuation_route(
        State(state),
        Json(route_dto(vec![[121.0, 14.6], [121.05, 14.65]])),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 400 for a single-point path
#[tokio::test]
async fn reject_single_point_route() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EvacuationRoute)?;
    let state: AppState = test.state();

    let result =
        create_evacuation_route(State(state), Json(route_dto(vec![[121.0, 14.6]]))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 204 on delete and 404 for an unknown id
#[tokio::test]
async fn delete_route_then_miss() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::EvacuationRoute)?;
    let state: AppState = test.state();

    let route = fixtures::geofence::insert_route(&test.db, 1, "Route A").await?;

    let result = delete_evacuation_route(State(state.clone()), Path(route.id)).await;
    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let result = delete_evacuation_route(State(state), Path(route.id)).await;
    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
