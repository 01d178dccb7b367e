use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        geofence::{
            CreateEvacuationCenterDto, EvacuationCenterDto, UpdateCenterOccupancyDto,
            UpdateCenterStatusDto,
        },
    },
    server::{
        controller::{geofence::GEOFENCE_TAG, BarangayParams},
        error::Error,
        model::app::AppState,
        service::geofence::GeofenceService,
    },
};

/// List evacuation centers for a barangay
#[utoipa::path(
    get,
    path = "/api/geofence/centers",
    tag = GEOFENCE_TAG,
    params(BarangayParams),
    responses(
        (status = 200, description = "Success when retrieving evacuation centers", body = Vec<EvacuationCenterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_evacuation_centers(
    State(state): State<AppState>,
    Query(params): Query<BarangayParams>,
) -> Result<impl IntoResponse, Error> {
    let geofence_service = GeofenceService::new(&state.db, &state.events);

    let centers = geofence_service.get_centers(params.barangay_id).await?;

    Ok((StatusCode::OK, Json(centers)))
}

/// Create an evacuation center
#[utoipa::path(
    post,
    path = "/api/geofence/centers",
    tag = GEOFENCE_TAG,
    request_body = CreateEvacuationCenterDto,
    responses(
        (status = 201, description = "Evacuation center created", body = EvacuationCenterDto),
        (status = 400, description = "Capacity or occupancy failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_evacuation_center(
    State(state): State<AppState>,
    Json(dto): Json<CreateEvacuationCenterDto>,
) -> Result<impl IntoResponse, Error> {
    let geofence_service = GeofenceService::new(&state.db, &state.events);

    let center = geofence_service.create_center(&dto).await?;

    Ok((StatusCode::CREATED, Json(center)))
}

/// Update the operational status of an evacuation center
#[utoipa::path(
    put,
    path = "/api/geofence/centers/{id}/status",
    tag = GEOFENCE_TAG,
    params(("id" = i32, Path, description = "Evacuation center id")),
    request_body = UpdateCenterStatusDto,
    responses(
        (status = 200, description = "Status updated", body = EvacuationCenterDto),
        (status = 404, description = "Evacuation center not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_center_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateCenterStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let geofence_service = GeofenceService::new(&state.db, &state.events);

    let center = geofence_service.update_center_status(id, dto.status).await?;

    Ok((StatusCode::OK, Json(center)))
}

/// Update the current occupancy of an evacuation center
#[utoipa::path(
    put,
    path = "/api/geofence/centers/{id}/occupancy",
    tag = GEOFENCE_TAG,
    params(("id" = i32, Path, description = "Evacuation center id")),
    request_body = UpdateCenterOccupancyDto,
    responses(
        (status = 200, description = "Occupancy updated", body = EvacuationCenterDto),
        (status = 400, description = "Occupancy failed validation", body = ErrorDto),
        (status = 404, description = "Evacuation center not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_center_occupancy(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateCenterOccupancyDto>,
) -> Result<impl IntoResponse, Error> {
    let geofence_service = GeofenceService::new(&state.db, &state.events);

    let center = geofence_service
        .update_center_occupancy(id, dto.current_occupancy)
        .await?;

    Ok((StatusCode::OK, Json(center)))
}

/// Delete an evacuation center
#[utoipa::path(
    delete,
    path = "/api/geofence/centers/{id}",
    tag = GEOFENCE_TAG,
    params(("id" = i32, Path, description = "Evacuation center id")),
    responses(
        (status = 204, description = "Evacuation center deleted"),
        (status = 404, description = "Evacuation center not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_evacuation_center(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let geofence_service = GeofenceService::new(&state.db, &state.events);

    geofence_service.delete_center(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
