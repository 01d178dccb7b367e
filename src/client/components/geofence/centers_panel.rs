use dioxus::prelude::*;

use crate::model::geofence::{CenterStatus, EvacuationCenterDto};

const CENTER_STATUSES: [CenterStatus; 4] = [
    CenterStatus::Available,
    CenterStatus::Full,
    CenterStatus::Closed,
    CenterStatus::Maintenance,
];

/// Management table for evacuation centers.
///
/// Status is operator-editable independently of occupancy: a center at
/// capacity is not automatically marked full, and occupancy edits never
/// change the status.
#[component]
pub fn CentersPanel(
    barangay_id: i32,
    centers: Vec<EvacuationCenterDto>,
    on_mutated: EventHandler<()>,
) -> Element {
    let mut error = use_signal(|| None::<String>);

    rsx! {
        div { class: "card shadow-sm",
            div { class: "card-body flex flex-col gap-2",
                h2 { class: "card-title", "Evacuation Centers" }

                if let Some(message) = error() {
                    div { class: "alert alert-error", p { "{message}" } }
                }

                div { class: "overflow-x-auto",
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Address" }
                                th { "Occupancy" }
                                th { "Status" }
                                th { }
                            }
                        }
                        tbody {
                            {centers.into_iter().map(|center| {
                                rsx! {
                                    CenterRow {
                                        key: "{center.id}",
                                        center,
                                        on_mutated,
                                        on_error: move |message| error.set(Some(message)),
                                    }
                                }
                            })}
                        }
                    }
                }

                NewCenterForm { barangay_id, on_mutated }
            }
        }
    }
}

#[component]
fn CenterRow(
    center: EvacuationCenterDto,
    on_mutated: EventHandler<()>,
    on_error: EventHandler<String>,
) -> Element {
    let center_id = center.id;

    let change_status = move |event: Event<FormData>| {
        let Some(status) = CenterStatus::parse(&event.value()) else {
            return;
        };

        #[cfg(feature = "web")]
        {
            use crate::client::util::api;
            use crate::model::geofence::UpdateCenterStatusDto;

            spawn(async move {
                match api::update_center_status(center_id, &UpdateCenterStatusDto { status }).await
                {
                    Ok(_) => on_mutated.call(()),
                    Err(err) => on_error.call(err),
                }
            });
        }
    };

    let change_occupancy = move |event: Event<FormData>| {
        let Ok(occupancy) = event.value().parse::<i32>() else {
            return;
        };
        if occupancy < 0 {
            return;
        }

        #[cfg(feature = "web")]
        {
            use crate::client::util::api;
            use crate::model::geofence::UpdateCenterOccupancyDto;

            spawn(async move {
                let dto = UpdateCenterOccupancyDto {
                    current_occupancy: occupancy,
                };
                match api::update_center_occupancy(center_id, &dto).await {
                    Ok(_) => on_mutated.call(()),
                    Err(err) => on_error.call(err),
                }
            });
        }
    };

    let delete = move |_| {
        #[cfg(feature = "web")]
        {
            use crate::client::util::api;

            spawn(async move {
                match api::delete_evacuation_center(center_id).await {
                    Ok(()) => on_mutated.call(()),
                    Err(err) => on_error.call(err),
                }
            });
        }
    };

    rsx! {
        tr {
            td { "{center.name}" }
            td { "{center.address}" }
            td {
                div { class: "flex items-center gap-1",
                    input {
                        class: "input input-bordered input-sm w-20",
                        r#type: "number",
                        min: "0",
                        value: "{center.current_occupancy}",
                        onchange: change_occupancy,
                    }
                    span { "/ {center.capacity}" }
                }
            }
            td {
                select {
                    class: "select select-bordered select-sm",
                    onchange: change_status,
                    for status in CENTER_STATUSES {
                        option {
                            value: status.as_str(),
                            selected: status.as_str() == center.status,
                            "{status}"
                        }
                    }
                }
            }
            td {
                button {
                    class: "btn btn-sm btn-error btn-outline",
                    onclick: delete,
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn NewCenterForm(barangay_id: i32, on_mutated: EventHandler<()>) -> Element {
    let mut name = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut capacity = use_signal(|| 0i32);
    let mut error = use_signal(|| None::<String>);

    let incomplete = name().trim().is_empty() || address().trim().is_empty() || capacity() < 0;

    let create = move |_| {
        if incomplete {
            return;
        }

        #[cfg(feature = "web")]
        {
            use crate::client::util::api;
            use crate::model::geofence::{CenterStatus, CreateEvacuationCenterDto};

            let dto = CreateEvacuationCenterDto {
                barangay_id,
                name: name().trim().to_string(),
                address: address().trim().to_string(),
                latitude: None,
                longitude: None,
                capacity: capacity(),
                current_occupancy: 0,
                status: CenterStatus::Available,
                contact_person: None,
                contact_phone: None,
                facilities: Vec::new(),
                notes: None,
            };

            spawn(async move {
                match api::create_evacuation_center(&dto).await {
                    Ok(_) => {
                        name.set(String::new());
                        address.set(String::new());
                        capacity.set(0);
                        error.set(None);
                        on_mutated.call(());
                    }
                    Err(err) => error.set(Some(err)),
                }
            });
        }
    };

    rsx! {
        div { class: "flex flex-wrap items-end gap-2",
            if let Some(message) = error() {
                div { class: "alert alert-error w-full", p { "{message}" } }
            }
            input {
                class: "input input-bordered",
                placeholder: "Center name",
                value: "{name}",
                oninput: move |event| name.set(event.value()),
            }
            input {
                class: "input input-bordered",
                placeholder: "Address",
                value: "{address}",
                oninput: move |event| address.set(event.value()),
            }
            input {
                class: "input input-bordered w-28",
                r#type: "number",
                min: "0",
                placeholder: "Capacity",
                value: "{capacity}",
                onchange: move |event| {
                    if let Ok(value) = event.value().parse::<i32>() {
                        capacity.set(value.max(0));
                    }
                },
            }
            button {
                class: "btn btn-primary",
                disabled: incomplete,
                onclick: create,
                "Add Center"
            }
        }
    }
}
