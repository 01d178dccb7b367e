//! Live change-stream subscription over server-sent events.
//!
//! One subscription per mounted feed: the owning component stores the
//! returned handle and drops it on unmount before opening another, so two
//! streams for the same scope are never live at once (which would double
//! every delivery and every alert).

use dioxus_logger::tracing;
use wasm_bindgen::prelude::*;
use web_sys::{EventSource, MessageEvent};

use crate::model::stream::ChangeEvent;

/// An open change stream. Dropping it closes the underlying connection and
/// detaches the callbacks.
pub struct FeedSubscription {
    source: EventSource,
    _on_message: Closure<dyn FnMut(MessageEvent)>,
    _on_error: Closure<dyn FnMut(web_sys::Event)>,
}

impl FeedSubscription {
    /// Opens the stream for one barangay.
    ///
    /// `on_event` receives each decoded change event; `on_error` fires when
    /// the connection drops so the UI can show a reconnect affordance.
    /// There is no automatic retry and no polling fallback.
    pub fn open(
        barangay_id: i32,
        mut on_event: impl FnMut(ChangeEvent) + 'static,
        mut on_error: impl FnMut() + 'static,
    ) -> Result<Self, String> {
        let url = format!("/api/emergency/stream?barangay_id={}", barangay_id);
        let source = EventSource::new(&url)
            .map_err(|_| "Failed to open the live request stream".to_string())?;

        let on_message = Closure::new(move |event: MessageEvent| {
            let Some(data) = event.data().as_string() else {
                return;
            };
            match serde_json::from_str::<ChangeEvent>(&data) {
                Ok(change) => on_event(change),
                Err(err) => {
                    tracing::warn!("Dropping malformed change event: {}", err);
                }
            }
        });
        source.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        let on_error = Closure::new(move |_event: web_sys::Event| {
            tracing::error!("Live request stream lost for barangay {}", barangay_id);
            on_error();
        });
        source.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        tracing::info!("Subscribed to request stream for barangay {}", barangay_id);
        Ok(Self {
            source,
            _on_message: on_message,
            _on_error: on_error,
        })
    }
}

impl Drop for FeedSubscription {
    fn drop(&mut self) {
        self.source.set_onmessage(None);
        self.source.set_onerror(None);
        self.source.close();
    }
}
