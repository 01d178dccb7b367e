pub mod emergency;
pub mod geofence;
