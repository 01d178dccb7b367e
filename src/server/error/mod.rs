//! Error types for the Bantay server application.
//!
//! Domain-specific error enums (emergency feed, geofencing, configuration) are
//! aggregated into a single [`Error`] type. All errors implement `IntoResponse`
//! for axum: validation failures map to 400, missing records to 404, and
//! everything else to a logged 500 with a generic body.

pub mod config;
pub mod emergency;
pub mod geofence;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, emergency::EmergencyError, geofence::GeofenceError},
};

/// Main error type for the Bantay server application.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Emergency feed error (unknown request, invalid status).
    #[error(transparent)]
    EmergencyError(#[from] EmergencyError),
    /// Geofencing error (polygon validation, unknown zone/route/center).
    #[error(transparent)]
    GeofenceError(#[from] GeofenceError),
    /// Internal error indicating a bug in Bantay's code.
    #[error(
        "Internal error with Bantay's code, please open a GitHub issue as this indicates a bug: {0:?}"
    )]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// JSON error (stored geometry or facilities column failed to round-trip).
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::EmergencyError(err) => err.into_response(),
            Self::GeofenceError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server
/// Error response. Logs the full error, returns a generic message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
