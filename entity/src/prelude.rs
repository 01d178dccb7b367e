pub use super::disaster_zone::Entity as DisasterZone;
pub use super::emergency_request::Entity as EmergencyRequest;
pub use super::evacuation_center::Entity as EvacuationCenter;
pub use super::evacuation_route::Entity as EvacuationRoute;
