pub mod disaster_zone;
pub mod emergency_request;
pub mod evacuation_center;
pub mod evacuation_route;

pub mod prelude;
