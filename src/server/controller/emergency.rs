use std::convert::Infallible;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{
        sse::{self, Sse},
        IntoResponse,
    },
    Json,
};
use dioxus_logger::tracing;
use futures::Stream;
use tokio_stream::{
    wrappers::{errors::BroadcastStreamRecvError, BroadcastStream},
    StreamExt,
};

use crate::{
    model::{
        api::ErrorDto,
        emergency::{CreateEmergencyRequestDto, EmergencyRequestDto, UpdateStatusDto},
    },
    server::{
        controller::BarangayParams, error::Error, model::app::AppState,
        service::emergency::EmergencyService,
    },
};

pub static EMERGENCY_TAG: &str = "emergency";

/// List emergency requests for a barangay
///
/// Returns the stored rows newest first; triage ordering is derived by the
/// client and never persisted.
#[utoipa::path(
    get,
    path = "/api/emergency/requests",
    tag = EMERGENCY_TAG,
    params(BarangayParams),
    responses(
        (status = 200, description = "Success when retrieving emergency requests", body = Vec<EmergencyRequestDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_emergency_requests(
    State(state): State<AppState>,
    Query(params): Query<BarangayParams>,
) -> Result<impl IntoResponse, Error> {
    let emergency_service = EmergencyService::new(&state.db, &state.events);

    let requests = emergency_service.get_requests(params.barangay_id).await?;

    Ok((StatusCode::OK, Json(requests)))
}

/// File a new emergency request
///
/// The request starts Pending; its arrival is broadcast to live feed
/// subscribers of the same barangay.
#[utoipa::path(
    post,
    path = "/api/emergency/requests",
    tag = EMERGENCY_TAG,
    request_body = CreateEmergencyRequestDto,
    responses(
        (status = 201, description = "Emergency request created", body = EmergencyRequestDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_emergency_request(
    State(state): State<AppState>,
    Json(dto): Json<CreateEmergencyRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let emergency_service = EmergencyService::new(&state.db, &state.events);

    let request = emergency_service.create_request(&dto).await?;

    Ok((StatusCode::CREATED, Json(request)))
}

/// Update the status of one emergency request
///
/// Changes the status column only and broadcasts the update; other viewers
/// reconcile through their live subscription.
#[utoipa::path(
    put,
    path = "/api/emergency/requests/{id}/status",
    tag = EMERGENCY_TAG,
    params(("id" = String, Path, description = "Emergency request id")),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Status updated", body = EmergencyRequestDto),
        (status = 404, description = "Emergency request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_request_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<UpdateStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let emergency_service = EmergencyService::new(&state.db, &state.events);

    let request = emergency_service.update_status(&id, dto.status).await?;

    Ok((StatusCode::OK, Json(request)))
}

/// Subscribe to live change events for a barangay
///
/// Server-sent events; each message is one JSON-encoded change event. Events
/// for other barangays are filtered out before they leave the server.
#[utoipa::path(
    get,
    path = "/api/emergency/stream",
    tag = EMERGENCY_TAG,
    params(BarangayParams),
    responses(
        (status = 200, description = "SSE stream of change events", content_type = "text/event-stream"),
    ),
)]
pub async fn stream_emergency_events(
    State(state): State<AppState>,
    Query(params): Query<BarangayParams>,
) -> Sse<impl Stream<Item = Result<sse::Event, Infallible>>> {
    let barangay_id = params.barangay_id;
    tracing::info!("Live feed subscriber attached for barangay {}", barangay_id);

    let stream =
        BroadcastStream::new(state.events.subscribe()).filter_map(move |item| match item {
            Ok(event) if event.barangay_id == barangay_id => {
                match serde_json::to_string(&event) {
                    Ok(json) => Some(Ok(sse::Event::default().data(json))),
                    Err(err) => {
                        tracing::error!("Failed to encode change event: {}", err);
                        None
                    }
                }
            }
            Ok(_) => None,
            Err(BroadcastStreamRecvError::Lagged(missed)) => {
                tracing::warn!(
                    "Feed subscriber for barangay {} lagged, skipped {} events",
                    barangay_id,
                    missed
                );
                None
            }
        });

    Sse::new(stream).keep_alive(sse::KeepAlive::default())
}
