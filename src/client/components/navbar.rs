use dioxus::prelude::*;

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                Link {
                    to: Route::Home {},
                    div { class: "flex items-center gap-2",
                        p { class: "text-xl",
                            "Bantay"
                        }
                        p { class: "text-xs",
                            "v0.1.0.Alpha-1"
                        }
                    }
                }
            }
            div {
                class: "navbar-end",
                ul { class: "flex gap-2",
                    li {
                        Link {
                            to: Route::EmergencyFeedPage {},
                            class: "btn btn-ghost",
                            "Emergency Feed"
                        }
                    }
                    li {
                        Link {
                            to: Route::GeofenceMapPage {},
                            class: "btn btn-ghost",
                            "Hazard Map"
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
