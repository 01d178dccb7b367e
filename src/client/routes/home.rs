use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMapLocationDot, FaTruckMedical};
use dioxus_free_icons::Icon;

use crate::client::components::Page;
use crate::client::router::Route;

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Bantay Home" }
        Meta {
            name: "description",
            content: "Barangay administration portal with emergency response triage and disaster-risk geofencing."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                div { class: "flex items-center gap-2",
                    p { class: "text-2xl",
                        "Bantay"
                    }
                    p {
                        "v0.1.0-Alpha.1"
                    }
                }
                p { class: "max-w-160 text-center",
                    "Live emergency request triage and disaster-risk zone management
                    for barangay response teams. Incoming requests appear in the feed
                    the moment residents report them; hazard zones, evacuation routes,
                    and evacuation centers are managed on the hazard map."
                }
                ul { class: "flex flex-wrap justify-center gap-2",
                    li {
                        Link { to: Route::EmergencyFeedPage {},
                            button {
                                class: "btn btn-primary w-56 flex gap-2",
                                Icon {
                                    width: 24,
                                    height: 24,
                                    icon: FaTruckMedical
                                }
                                p {
                                    "Emergency Feed"
                                }
                            }
                        }
                    }
                    li {
                        Link { to: Route::GeofenceMapPage {},
                            button {
                                class: "btn btn-outline w-56 flex gap-2",
                                Icon {
                                    width: 24,
                                    height: 24,
                                    icon: FaMapLocationDot
                                }
                                p {
                                    "Hazard Map"
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
