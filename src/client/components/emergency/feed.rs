use chrono::{NaiveDateTime, Utc};
use dioxus::prelude::*;

use crate::client::store::feed::{FeedAlert, FeedList};
use crate::model::emergency::{EmergencyRequestDto, RequestStatus};

use super::StatusDialog;

fn format_relative_time(datetime: &NaiveDateTime) -> String {
    let now = Utc::now().naive_utc();
    let duration = now.signed_duration_since(*datetime);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        format!("{} seconds ago", seconds)
    } else if minutes < 60 {
        format!(
            "{} minute{} ago",
            minutes,
            if minutes == 1 { "" } else { "s" }
        )
    } else if hours < 24 {
        format!("{} hour{} ago", hours, if hours == 1 { "" } else { "s" })
    } else {
        format!("{} day{} ago", days, if days == 1 { "" } else { "s" })
    }
}

fn status_badge_class(status: &str) -> &'static str {
    match status {
        "Pending" => "badge badge-error",
        "In Progress" => "badge badge-warning",
        "Responded" => "badge badge-success",
        _ => "badge badge-ghost",
    }
}

/// Live triage queue for one barangay.
///
/// The component owns the authoritative request list and the single live
/// subscription for its scope. Remounting tears the old subscription down
/// before opening a new one, so deliveries are never doubled.
#[component]
pub fn EmergencyFeed(barangay_id: i32) -> Element {
    let mut feed = use_signal(FeedList::new);
    let filter = use_signal(|| None::<RequestStatus>);
    let search = use_signal(String::new);
    let mut alert = use_signal(|| None::<FeedAlert>);
    let mut stream_down = use_signal(|| false);
    let mut selected = use_signal(|| None::<EmergencyRequestDto>);
    // Bumped by the reconnect button; the subscription effect re-runs on it.
    let mut connect_nonce = use_signal(|| 0u32);

    // Initial list fetch. Rows already delivered by the stream win over
    // this snapshot inside merge_initial.
    #[cfg(feature = "web")]
    {
        use dioxus_logger::tracing;

        use crate::client::util::api;

        let fetched = use_resource(move || async move {
            api::get_emergency_requests(barangay_id).await
        });

        match &*fetched.read_unchecked() {
            Some(Ok(requests)) => {
                feed.write().merge_initial(requests.clone());
            }
            Some(Err(err)) => {
                tracing::error!("Failed to fetch emergency requests: {}", err);
            }
            None => (),
        }
    }

    // Exactly one open subscription per mounted feed.
    #[cfg(feature = "web")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use dioxus_logger::tracing;

        use crate::client::util::stream::FeedSubscription;

        let slot: Rc<RefCell<Option<FeedSubscription>>> =
            use_hook(|| Rc::new(RefCell::new(None)));

        {
            let slot = Rc::clone(&slot);
            use_effect(move || {
                let _nonce = connect_nonce();
                // Close the previous stream before opening the next.
                slot.borrow_mut().take();

                let opened = FeedSubscription::open(
                    barangay_id,
                    move |event| {
                        if let Some(new_alert) = feed.write().apply(&event) {
                            alert.set(Some(new_alert));
                        }
                    },
                    move || stream_down.set(true),
                );

                match opened {
                    Ok(subscription) => {
                        stream_down.set(false);
                        *slot.borrow_mut() = Some(subscription);
                    }
                    Err(err) => {
                        tracing::error!("{}", err);
                        stream_down.set(true);
                    }
                }
            });
        }

        use_drop(move || {
            slot.borrow_mut().take();
        });
    }

    let feed_guard = feed.read();
    let visible: Vec<EmergencyRequestDto> = feed_guard
        .visible(filter(), &search())
        .into_iter()
        .cloned()
        .collect();
    drop(feed_guard);

    rsx! {
        div { class: "flex flex-col gap-4",
            if stream_down() {
                div { class: "alert alert-warning flex justify-between",
                    p { "Live updates are disconnected. New requests will not appear." }
                    button {
                        class: "btn btn-sm",
                        onclick: move |_| connect_nonce += 1,
                        "Reconnect"
                    }
                }
            }

            if let Some(feed_alert) = alert() {
                div { class: "alert feed-alert flex justify-between",
                    p { class: "font-bold",
                        "New emergency request: {feed_alert.request_type}"
                    }
                    button {
                        class: "btn btn-sm btn-ghost",
                        onclick: move |_| alert.set(None),
                        "Dismiss"
                    }
                }
            }

            FeedControls { filter, search }

            div { class: "overflow-x-auto",
                table { class: "table table-md",
                    thead {
                        tr {
                            th { "Type" }
                            th { "Status" }
                            th { "Details" }
                            th { "Reported" }
                            th { "Location" }
                            th { }
                        }
                    }
                    tbody {
                        {visible.into_iter().map(|request| {
                            let row = request.clone();
                            rsx! {
                                tr { key: "{request.id}",
                                    td { "{request.request_type}" }
                                    td {
                                        span { class: status_badge_class(&request.status),
                                            "{request.status}"
                                        }
                                    }
                                    td { {request.details.clone().unwrap_or_default()} }
                                    td { {format_relative_time(&request.created_at)} }
                                    td {
                                        if let (Some(lat), Some(lng)) = (request.latitude, request.longitude) {
                                            {format!("{:.5}, {:.5}", lat, lng)}
                                        } else {
                                            "Not provided"
                                        }
                                    }
                                    td {
                                        button {
                                            class: "btn btn-sm btn-outline",
                                            onclick: move |_| selected.set(Some(row.clone())),
                                            "Update"
                                        }
                                    }
                                }
                            }
                        })}
                    }
                }
            }

            if let Some(request) = selected() {
                StatusDialog {
                    request,
                    on_close: move |_| selected.set(None),
                }
            }
        }
    }
}

#[component]
fn FeedControls(filter: Signal<Option<RequestStatus>>, search: Signal<String>) -> Element {
    let mut filter = filter;
    let mut search = search;

    rsx! {
        div { class: "flex flex-wrap gap-2",
            select {
                class: "select select-bordered",
                onchange: move |event| {
                    filter.set(RequestStatus::parse(&event.value()));
                },
                option { value: "All", "All" }
                for status in RequestStatus::all() {
                    option { value: status.as_str(), "{status}" }
                }
            }
            input {
                class: "input input-bordered grow",
                r#type: "search",
                placeholder: "Search by type or details",
                value: "{search}",
                oninput: move |event| search.set(event.value()),
            }
        }
    }
}
