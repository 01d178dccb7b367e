//! Lifecycle management for a single interactive map instance.
//!
//! Each mounted view owns exactly one [`MapSurface`], created in an effect
//! and torn down when the handle is dropped. The handle is threaded through
//! every map operation; nothing here is looked up from global state, so a
//! stale handle from a previous mount can never be touched after teardown.

use std::cell::Cell;
use std::rc::Rc;

use dioxus_logger::tracing;
use wasm_bindgen::prelude::*;

use super::leaflet::{self, LeafletMap, Options, TileLayer};

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";
const TILE_MAX_ZOOM: f64 = 18.0;

/// A handle registered on the surface for a map click listener. Dropping it
/// detaches the listener, so a listener cannot outlive the component that
/// registered it.
pub struct ClickHandle {
    map: LeafletMap,
    event: &'static str,
    closure: Closure<dyn FnMut(leaflet::MouseEvent)>,
}

impl Drop for ClickHandle {
    fn drop(&mut self) {
        self.map.off(self.event, self.closure.as_ref());
    }
}

pub struct MapSurface {
    map: LeafletMap,
    _tiles: TileLayer,
    /// Cleared on teardown; deferred steps check it before touching the map.
    alive: Rc<Cell<bool>>,
}

impl MapSurface {
    /// Creates the map in the given container, attaches the base tile
    /// layer, and schedules the post-layout size invalidation.
    ///
    /// Callers guard against double-mount by keeping the returned surface in
    /// an `Option` slot and only calling `mount` while the slot is empty;
    /// mounting twice into the same container is a Leaflet error.
    pub fn mount(container_id: &str, center: [f64; 2], zoom: f64) -> Result<Self, String> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "No document available".to_string())?;
        if document.get_element_by_id(container_id).is_none() {
            return Err(format!("Map container #{} not found", container_id));
        }

        let map = leaflet::new_map(container_id);
        map.set_view(&leaflet::lat_lng(center[0], center[1]), zoom);

        let tiles = leaflet::new_tile_layer(
            TILE_URL,
            &Options::new()
                .set("attribution", TILE_ATTRIBUTION)
                .set("maxZoom", TILE_MAX_ZOOM)
                .build(),
        );
        tiles.add_to(&map);

        let surface = Self {
            map,
            _tiles: tiles,
            alive: Rc::new(Cell::new(true)),
        };
        surface.schedule_invalidate_size();

        tracing::info!("Mounted map surface in #{}", container_id);
        Ok(surface)
    }

    pub fn map(&self) -> &LeafletMap {
        &self.map
    }

    /// Recomputes the cached viewport dimensions.
    ///
    /// Leaflet caches the container size at construction time; when the
    /// container is laid out after the map is created (dialogs, flex
    /// layouts) tiles render partially and click coordinates are wrong
    /// until this runs.
    pub fn invalidate_size(&self) {
        self.map.invalidate_size();
    }

    /// Defers `invalidate_size` to a later turn of the event loop so layout
    /// has settled first. The surface may be torn down before the timeout
    /// fires (a dialog opened and closed quickly), so the callback checks
    /// the liveness flag and otherwise drops the event.
    fn schedule_invalidate_size(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let alive = Rc::clone(&self.alive);
        let map = self.map.clone();
        let callback = Closure::once_into_js(move || {
            if alive.get() {
                map.invalidate_size();
            }
        });

        if window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                0,
            )
            .is_err()
        {
            tracing::warn!("Failed to schedule deferred map size invalidation");
        }
    }

    /// Attaches a click listener and returns the handle that owns it.
    pub fn on_click(&self, mut handler: impl FnMut(f64, f64) + 'static) -> ClickHandle {
        let alive = Rc::clone(&self.alive);
        let closure = Closure::new(move |event: leaflet::MouseEvent| {
            // A click queued before teardown can fire after it; drop it.
            if !alive.get() {
                return;
            }
            let latlng = event.latlng();
            handler(latlng.lat(), latlng.lng());
        });

        self.map.on("click", closure.as_ref());
        ClickHandle {
            map: self.map.clone(),
            event: "click",
            closure,
        }
    }

    /// Attaches a double-click listener, used as the drawing finish gesture.
    pub fn on_double_click(&self, mut handler: impl FnMut() + 'static) -> ClickHandle {
        let alive = Rc::clone(&self.alive);
        let closure = Closure::new(move |_event: leaflet::MouseEvent| {
            if !alive.get() {
                return;
            }
            handler();
        });

        self.map.on("dblclick", closure.as_ref());
        ClickHandle {
            map: self.map.clone(),
            event: "dblclick",
            closure,
        }
    }
}

impl Drop for MapSurface {
    fn drop(&mut self) {
        self.alive.set(false);
        // Removes the map, its tile layer, listeners, and DOM nodes.
        self.map.remove();
    }
}
