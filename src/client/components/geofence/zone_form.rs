use dioxus::prelude::*;

use crate::model::geo::{Polygon, RiskLevel, ZoneType};
use crate::model::geofence::DisasterZoneDto;

const ZONE_TYPES: [ZoneType; 6] = [
    ZoneType::Flood,
    ZoneType::Fire,
    ZoneType::Landslide,
    ZoneType::Earthquake,
    ZoneType::Typhoon,
    ZoneType::Other,
];

const RISK_LEVELS: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High];

/// Save form for a freshly drawn zone polygon. The polygon itself is
/// already closed and validated by the drawing engine; this form only
/// collects the metadata and performs the save call.
#[component]
pub fn ZoneForm(
    barangay_id: i32,
    polygon: Polygon,
    on_saved: EventHandler<DisasterZoneDto>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut zone_name = use_signal(String::new);
    let mut zone_type = use_signal(|| ZoneType::Flood);
    let mut risk_level = use_signal(|| RiskLevel::Moderate);
    let mut notes = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let saving = use_signal(|| false);

    let name_missing = zone_name().trim().is_empty();

    let save = move |_| {
        if name_missing || saving() {
            return;
        }

        #[cfg(feature = "web")]
        {
            use dioxus_logger::tracing;

            use crate::client::util::api;
            use crate::model::geofence::CreateDisasterZoneDto;

            let mut saving = saving;
            let polygon = polygon.clone();
            let dto = CreateDisasterZoneDto {
                barangay_id,
                zone_name: zone_name().trim().to_string(),
                zone_type: zone_type().as_str().to_string(),
                risk_level: risk_level().as_str().to_string(),
                polygon_coords: polygon,
                notes: {
                    let text = notes();
                    let text = text.trim();
                    (!text.is_empty()).then(|| text.to_string())
                },
            };

            saving.set(true);
            error.set(None);

            spawn(async move {
                match api::create_disaster_zone(&dto).await {
                    Ok(zone) => on_saved.call(zone),
                    Err(err) => {
                        tracing::error!("Failed to save disaster zone: {}", err);
                        error.set(Some(err));
                    }
                }
                saving.set(false);
            });
        }
    };

    rsx! {
        div { class: "card shadow-sm",
            div { class: "card-body flex flex-col gap-2",
                h2 { class: "card-title", "Save Risk Zone" }

                if let Some(message) = error() {
                    div { class: "alert alert-error", p { "{message}" } }
                }

                input {
                    class: "input input-bordered",
                    placeholder: "Zone name",
                    value: "{zone_name}",
                    oninput: move |event| zone_name.set(event.value()),
                }
                select {
                    class: "select select-bordered",
                    onchange: move |event| zone_type.set(ZoneType::parse(&event.value())),
                    for kind in ZONE_TYPES {
                        option {
                            value: kind.as_str(),
                            selected: kind == zone_type(),
                            "{kind.as_str()}"
                        }
                    }
                }
                select {
                    class: "select select-bordered",
                    onchange: move |event| {
                        if let Some(level) = RiskLevel::parse(&event.value()) {
                            risk_level.set(level);
                        }
                    },
                    for level in RISK_LEVELS {
                        option {
                            value: level.as_str(),
                            selected: level == risk_level(),
                            "{level.as_str()} risk"
                        }
                    }
                }
                textarea {
                    class: "textarea textarea-bordered",
                    placeholder: "Notes (optional)",
                    value: "{notes}",
                    oninput: move |event| notes.set(event.value()),
                }

                div { class: "card-actions justify-end",
                    button {
                        class: "btn",
                        onclick: move |_| on_cancel.call(()),
                        "Discard"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: name_missing || saving(),
                        onclick: save,
                        "Save Zone"
                    }
                }
            }
        }
    }
}
