use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{EmergencyFeedPage, GeofenceMapPage, Home, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/emergency")]
    EmergencyFeedPage {},

    #[route("/geofence")]
    GeofenceMapPage {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
