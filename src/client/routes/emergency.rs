use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::emergency::EmergencyFeed;
use crate::client::components::Page;

use super::ACTIVE_BARANGAY_ID;

#[component]
pub fn EmergencyFeedPage() -> Element {
    rsx!(
        Title { "Emergency Feed | Bantay" }
        Meta {
            name: "description",
            content: "Live emergency request queue with triage ordering."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6",
                EmergencyFeed { barangay_id: ACTIVE_BARANGAY_ID }
            }
        }
    )
}
