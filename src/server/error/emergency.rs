use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing::debug;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum EmergencyError {
    #[error("Emergency request {0:?} not found")]
    RequestNotFound(String),
}

impl IntoResponse for EmergencyError {
    fn into_response(self) -> Response {
        match self {
            Self::RequestNotFound(ref id) => {
                debug!("Emergency request lookup failed for {}", id);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Emergency request not found".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
