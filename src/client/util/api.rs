//! Thin reqwasm wrappers around the portal's API.
//!
//! Every helper returns `Result<T, String>` with a user-presentable message;
//! callers surface the message as a notification and log it, they never
//! retry automatically.

use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::model::api::ErrorDto;
use crate::model::emergency::{EmergencyRequestDto, RequestStatus, UpdateStatusDto};
use crate::model::geofence::{
    CreateDisasterZoneDto, CreateEvacuationCenterDto, CreateEvacuationRouteDto, DisasterZoneDto,
    EvacuationCenterDto, EvacuationRouteDto, UpdateCenterOccupancyDto, UpdateCenterStatusDto,
};

async fn parse_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, String> {
    if response.status() == 200 || response.status() == 201 {
        response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse {}: {}", what, e))
    } else {
        Err(error_message(response).await)
    }
}

async fn expect_no_content(response: Response) -> Result<(), String> {
    match response.status() {
        200 | 204 => Ok(()),
        _ => Err(error_message(response).await),
    }
}

async fn error_message(response: Response) -> String {
    let status = response.status();
    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        format!("Request failed with status {}: {}", status, error_dto.error)
    } else {
        format!("Request failed with status {}", status)
    }
}

async fn send<T: DeserializeOwned>(request: Request, what: &str) -> Result<T, String> {
    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    parse_json(response, what).await
}

fn json_body(payload: &impl Serialize) -> Result<String, String> {
    serde_json::to_string(payload).map_err(|e| format!("Failed to encode request body: {}", e))
}

/// Retrieve the current emergency request list for a barangay
pub async fn get_emergency_requests(barangay_id: i32) -> Result<Vec<EmergencyRequestDto>, String> {
    let url = format!("/api/emergency/requests?barangay_id={}", barangay_id);
    send(Request::get(&url), "emergency requests").await
}

/// Commit a new status for a single emergency request
pub async fn update_request_status(
    request_id: &str,
    status: RequestStatus,
) -> Result<EmergencyRequestDto, String> {
    let url = format!("/api/emergency/requests/{}/status", request_id);
    let body = json_body(&UpdateStatusDto { status })?;
    send(
        Request::put(&url)
            .header("Content-Type", "application/json")
            .body(body),
        "emergency request",
    )
    .await
}

pub async fn get_disaster_zones(barangay_id: i32) -> Result<Vec<DisasterZoneDto>, String> {
    let url = format!("/api/geofence/zones?barangay_id={}", barangay_id);
    send(Request::get(&url), "disaster zones").await
}

pub async fn create_disaster_zone(
    zone: &CreateDisasterZoneDto,
) -> Result<DisasterZoneDto, String> {
    send(
        Request::post("/api/geofence/zones")
            .header("Content-Type", "application/json")
            .body(json_body(zone)?),
        "disaster zone",
    )
    .await
}

pub async fn delete_disaster_zone(zone_id: i32) -> Result<(), String> {
    let url = format!("/api/geofence/zones/{}", zone_id);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    expect_no_content(response).await
}

pub async fn get_evacuation_routes(barangay_id: i32) -> Result<Vec<EvacuationRouteDto>, String> {
    let url = format!("/api/geofence/routes?barangay_id={}", barangay_id);
    send(Request::get(&url), "evacuation routes").await
}

pub async fn create_evacuation_route(
    route: &CreateEvacuationRouteDto,
) -> Result<EvacuationRouteDto, String> {
    send(
        Request::post("/api/geofence/routes")
            .header("Content-Type", "application/json")
            .body(json_body(route)?),
        "evacuation route",
    )
    .await
}

pub async fn delete_evacuation_route(route_id: i32) -> Result<(), String> {
    let url = format!("/api/geofence/routes/{}", route_id);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    expect_no_content(response).await
}

pub async fn get_evacuation_centers(barangay_id: i32) -> Result<Vec<EvacuationCenterDto>, String> {
    let url = format!("/api/geofence/centers?barangay_id={}", barangay_id);
    send(Request::get(&url), "evacuation centers").await
}

pub async fn create_evacuation_center(
    center: &CreateEvacuationCenterDto,
) -> Result<EvacuationCenterDto, String> {
    send(
        Request::post("/api/geofence/centers")
            .header("Content-Type", "application/json")
            .body(json_body(center)?),
        "evacuation center",
    )
    .await
}

pub async fn update_center_status(
    center_id: i32,
    dto: &UpdateCenterStatusDto,
) -> Result<EvacuationCenterDto, String> {
    let url = format!("/api/geofence/centers/{}/status", center_id);
    send(
        Request::put(&url)
            .header("Content-Type", "application/json")
            .body(json_body(dto)?),
        "evacuation center",
    )
    .await
}

pub async fn update_center_occupancy(
    center_id: i32,
    dto: &UpdateCenterOccupancyDto,
) -> Result<EvacuationCenterDto, String> {
    let url = format!("/api/geofence/centers/{}/occupancy", center_id);
    send(
        Request::put(&url)
            .header("Content-Type", "application/json")
            .body(json_body(dto)?),
        "evacuation center",
    )
    .await
}

pub async fn delete_evacuation_center(center_id: i32) -> Result<(), String> {
    let url = format!("/api/geofence/centers/{}", center_id);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    expect_no_content(response).await
}
