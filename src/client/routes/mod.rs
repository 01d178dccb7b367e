mod emergency;
mod geofence;
mod home;
mod not_found;

pub use emergency::EmergencyFeedPage;
pub use geofence::GeofenceMapPage;
pub use home::Home;
pub use not_found::NotFound;

/// Tenant scope for every record on every page.
///
/// TODO: derive the active barangay from the signed-in official's session
/// once the auth layer lands; until then the portal serves a single
/// barangay.
pub const ACTIVE_BARANGAY_ID: i32 = 1;
