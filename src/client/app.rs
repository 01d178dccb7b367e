use dioxus::document::{Link as HeadLink, Script, Stylesheet};
use dioxus::prelude::*;

use crate::client::router::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        Stylesheet { href: MAIN_CSS }
        // Leaflet ships as a global bundle; the map bindings resolve against
        // the `L` namespace it installs.
        HeadLink {
            rel: "stylesheet",
            href: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css",
        }
        Script { src: "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" }

        Router::<Route> {}
    }
}
