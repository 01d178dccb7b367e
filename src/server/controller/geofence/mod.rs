pub mod center;
pub mod route;
pub mod zone;

pub static GEOFENCE_TAG: &str = "geofence";
