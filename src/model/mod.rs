pub mod api;
pub mod emergency;
pub mod geo;
pub mod geofence;
pub mod stream;
