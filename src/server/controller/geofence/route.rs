use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        geofence::{CreateEvacuationRouteDto, EvacuationRouteDto},
    },
    server::{
        controller::{geofence::GEOFENCE_TAG, BarangayParams},
        error::Error,
        model::app::AppState,
        service::geofence::GeofenceService,
    },
};

/// List evacuation routes for a barangay
#[utoipa::path(
    get,
    path = "/api/geofence/routes",
    tag = GEOFENCE_TAG,
    params(BarangayParams),
    responses(
        (status = 200, description = "Success when retrieving evacuation routes", body = Vec<EvacuationRouteDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_evacuation_routes(
    State(state): State<AppState>,
    Query(params): Query<BarangayParams>,
) -> Result<impl IntoResponse, Error> {
    let geofence_service = GeofenceService::new(&state.db, &state.events);

    let routes = geofence_service.get_routes(params.barangay_id).await?;

    Ok((StatusCode::OK, Json(routes)))
}

/// Create an evacuation route
#[utoipa::path(
    post,
    path = "/api/geofence/routes",
    tag = GEOFENCE_TAG,
    request_body = CreateEvacuationRouteDto,
    responses(
        (status = 201, description = "Evacuation route created", body = EvacuationRouteDto),
        (status = 400, description = "Route path failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_evacuation_route(
    State(state): State<AppState>,
    Json(dto): Json<CreateEvacuationRouteDto>,
) -> Result<impl IntoResponse, Error> {
    let geofence_service = GeofenceService::new(&state.db, &state.events);

    let route = geofence_service.create_route(&dto).await?;

    Ok((StatusCode::CREATED, Json(route)))
}

/// Delete an evacuation route
#[utoipa::path(
    delete,
    path = "/api/geofence/routes/{id}",
    tag = GEOFENCE_TAG,
    params(("id" = i32, Path, description = "Evacuation route id")),
    responses(
        (status = 204, description = "Evacuation route deleted"),
        (status = 404, description = "Evacuation route not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_evacuation_route(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let geofence_service = GeofenceService::new(&state.db, &state.events);

    geofence_service.delete_route(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
