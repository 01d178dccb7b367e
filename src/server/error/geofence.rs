use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing::debug;
use thiserror::Error;

use crate::model::{api::ErrorDto, geo::GeoError};

#[derive(Error, Debug)]
pub enum GeofenceError {
    /// The submitted ring failed validation before any insert was attempted.
    #[error("Polygon rejected before save: {0}")]
    InvalidPolygon(#[from] GeoError),
    #[error("Evacuation route needs at least 2 points, got {0}")]
    TooFewRoutePoints(usize),
    #[error("Capacity and occupancy must not be negative")]
    NegativeCount,
    #[error("Disaster zone {0} not found")]
    ZoneNotFound(i32),
    #[error("Evacuation route {0} not found")]
    RouteNotFound(i32),
    #[error("Evacuation center {0} not found")]
    CenterNotFound(i32),
}

impl IntoResponse for GeofenceError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidPolygon(_) | Self::TooFewRoutePoints(_) | Self::NegativeCount => {
                StatusCode::BAD_REQUEST
            }
            Self::ZoneNotFound(_) | Self::RouteNotFound(_) | Self::CenterNotFound(_) => {
                StatusCode::NOT_FOUND
            }
        };

        debug!("Geofence error: {}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
