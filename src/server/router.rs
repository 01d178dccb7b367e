//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// # Registered Endpoints
/// - `GET /api/emergency/requests` - List emergency requests for a barangay
/// - `POST /api/emergency/requests` - File a new emergency request
/// - `PUT /api/emergency/requests/{id}/status` - Update one request's status
/// - `GET /api/emergency/stream` - SSE stream of change events
/// - `GET|POST /api/geofence/zones`, `DELETE /api/geofence/zones/{id}`
/// - `GET|POST /api/geofence/routes`, `DELETE /api/geofence/routes/{id}`
/// - `GET|POST /api/geofence/centers`, `PUT .../{id}/status`,
///   `PUT .../{id}/occupancy`, `DELETE /api/geofence/centers/{id}`
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Bantay", description = "Bantay API"), tags(
        (name = controller::emergency::EMERGENCY_TAG, description = "Emergency request feed API routes"),
        (name = controller::geofence::GEOFENCE_TAG, description = "Disaster zone, route, and center API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::emergency::get_emergency_requests,
            controller::emergency::create_emergency_request
        ))
        .routes(routes!(controller::emergency::update_request_status))
        .routes(routes!(controller::emergency::stream_emergency_events))
        .routes(routes!(
            controller::geofence::zone::get_disaster_zones,
            controller::geofence::zone::create_disaster_zone
        ))
        .routes(routes!(controller::geofence::zone::delete_disaster_zone))
        .routes(routes!(
            controller::geofence::route::get_evacuation_routes,
            controller::geofence::route::create_evacuation_route
        ))
        .routes(routes!(controller::geofence::route::delete_evacuation_route))
        .routes(routes!(
            controller::geofence::center::get_evacuation_centers,
            controller::geofence::center::create_evacuation_center
        ))
        .routes(routes!(controller::geofence::center::update_center_status))
        .routes(routes!(controller::geofence::center::update_center_occupancy))
        .routes(routes!(controller::geofence::center::delete_evacuation_center))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
