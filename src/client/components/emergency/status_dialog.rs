use dioxus::prelude::*;

use crate::model::emergency::{EmergencyRequestDto, RequestStatus};

/// Detail dialog that displays and mutates one request's status.
///
/// The dialog updates its own view optimistically but never touches the
/// feed list; every other viewer reconciles through the live stream's
/// update event. On a rejected commit the display rolls back to the last
/// server-confirmed status.
#[component]
pub fn StatusDialog(request: EmergencyRequestDto, on_close: EventHandler<()>) -> Element {
    // Last status confirmed by the server.
    let confirmed = use_signal(|| request.status.clone());
    let mut selection = use_signal(|| {
        RequestStatus::parse(&request.status).unwrap_or(RequestStatus::Pending)
    });
    let mut error = use_signal(|| None::<String>);
    let saving = use_signal(|| false);

    // No-op submissions are stopped here, before any network call.
    let unchanged = selection().as_str() == confirmed();

    let request_id = request.id.clone();
    let commit = move |_| {
        if unchanged || saving() {
            return;
        }

        #[cfg(feature = "web")]
        {
            use dioxus_logger::tracing;

            use crate::client::util::api;

            let mut confirmed = confirmed;
            let mut saving = saving;
            let request_id = request_id.clone();
            let new_status = selection();
            let previous = confirmed();

            // Optimistic: show the new status while the call is in flight.
            confirmed.set(new_status.as_str().to_string());
            saving.set(true);
            error.set(None);

            spawn(async move {
                match api::update_request_status(&request_id, new_status).await {
                    Ok(updated) => {
                        confirmed.set(updated.status);
                    }
                    Err(err) => {
                        // Roll back: the UI must not keep showing a status
                        // that was never committed.
                        tracing::error!("Status update failed: {}", err);
                        confirmed.set(previous);
                        error.set(Some(err));
                    }
                }
                saving.set(false);
            });
        }
    };

    rsx! {
        div { class: "modal modal-open",
            div { class: "modal-box flex flex-col gap-4",
                h2 { class: "text-lg font-bold", "{request.request_type}" }
                p { class: "text-sm",
                    {request.details.clone().unwrap_or_else(|| "No details provided".to_string())}
                }
                div { class: "flex items-center gap-2",
                    p { "Current status:" }
                    span { class: "font-semibold", "{confirmed}" }
                }

                if let Some(message) = error() {
                    div { class: "alert alert-error",
                        p { "{message}" }
                    }
                }

                select {
                    class: "select select-bordered",
                    onchange: move |event| {
                        if let Some(status) = RequestStatus::parse(&event.value()) {
                            selection.set(status);
                        }
                    },
                    for status in RequestStatus::all() {
                        option {
                            value: status.as_str(),
                            selected: status == selection(),
                            "{status}"
                        }
                    }
                }

                div { class: "modal-action",
                    button {
                        class: "btn",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: unchanged || saving(),
                        onclick: commit,
                        "Update Status"
                    }
                }
            }
        }
    }
}
