use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        geofence::{CreateDisasterZoneDto, DisasterZoneDto},
    },
    server::{
        controller::{geofence::GEOFENCE_TAG, BarangayParams},
        error::Error,
        model::app::AppState,
        service::geofence::GeofenceService,
    },
};

/// List disaster-risk zones for a barangay
#[utoipa::path(
    get,
    path = "/api/geofence/zones",
    tag = GEOFENCE_TAG,
    params(BarangayParams),
    responses(
        (status = 200, description = "Success when retrieving disaster zones", body = Vec<DisasterZoneDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_disaster_zones(
    State(state): State<AppState>,
    Query(params): Query<BarangayParams>,
) -> Result<impl IntoResponse, Error> {
    let geofence_service = GeofenceService::new(&state.db, &state.events);

    let zones = geofence_service.get_zones(params.barangay_id).await?;

    Ok((StatusCode::OK, Json(zones)))
}

/// Create a disaster-risk zone
///
/// The polygon ring is re-validated server-side; an invalid ring is rejected
/// with 400 before anything is written.
#[utoipa::path(
    post,
    path = "/api/geofence/zones",
    tag = GEOFENCE_TAG,
    request_body = CreateDisasterZoneDto,
    responses(
        (status = 201, description = "Disaster zone created", body = DisasterZoneDto),
        (status = 400, description = "Polygon failed validation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_disaster_zone(
    State(state): State<AppState>,
    Json(dto): Json<CreateDisasterZoneDto>,
) -> Result<impl IntoResponse, Error> {
    let geofence_service = GeofenceService::new(&state.db, &state.events);

    let zone = geofence_service.create_zone(&dto).await?;

    Ok((StatusCode::CREATED, Json(zone)))
}

/// Delete a disaster-risk zone
#[utoipa::path(
    delete,
    path = "/api/geofence/zones/{id}",
    tag = GEOFENCE_TAG,
    params(("id" = i32, Path, description = "Disaster zone id")),
    responses(
        (status = 204, description = "Disaster zone deleted"),
        (status = 404, description = "Disaster zone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_disaster_zone(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let geofence_service = GeofenceService::new(&state.db, &state.events);

    geofence_service.delete_zone(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
