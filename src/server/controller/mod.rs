//! HTTP controller endpoints for the Bantay web API.
//!
//! Axum handlers for the emergency feed and the geofencing surface. Controllers
//! parse inputs, delegate to services, and map results to HTTP responses; every
//! endpoint carries a utoipa annotation for the OpenAPI document.

pub mod emergency;
pub mod geofence;

use serde::Deserialize;
use utoipa::IntoParams;

/// Barangay scope for list and stream endpoints. Arrives as an explicit
/// query parameter; there is no session-derived tenant.
#[derive(Deserialize, IntoParams)]
pub struct BarangayParams {
    pub barangay_id: i32,
}
