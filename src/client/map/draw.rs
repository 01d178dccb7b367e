//! Polygon drawing as an explicit state machine.
//!
//! The vertex accumulation and transition rules live here, independent of
//! the map widget, so they can be tested without a browser. The map page
//! wires clicks and key presses to these methods and attaches/detaches its
//! listeners when the engine enters or leaves `Drawing`, and nowhere else,
//! so no listener can outlive a drawing session.

use crate::model::geo::{to_closed_ring, GeoError, Polygon};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawState {
    Idle,
    Drawing,
    Closed,
}

/// Outcome of a transition attempt, so the caller knows whether to redraw
/// or clear the uncommitted shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawEffect {
    /// Nothing changed; the call was invalid in the current state.
    None,
    /// The vertex list changed; redraw the uncommitted shape.
    Redraw,
    /// The uncommitted shape must be removed from the surface.
    Clear,
    /// The shape is complete; restyle it with its final fill.
    Finished,
}

#[derive(Debug)]
pub struct DrawingEngine {
    state: DrawState,
    /// Accumulated clicks in map order, [lat, lng].
    vertices: Vec<[f64; 2]>,
}

impl Default for DrawingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingEngine {
    pub fn new() -> Self {
        Self {
            state: DrawState::Idle,
            vertices: Vec::new(),
        }
    }

    pub fn state(&self) -> DrawState {
        self.state
    }

    pub fn vertices(&self) -> &[[f64; 2]] {
        &self.vertices
    }

    /// Idle → Drawing. Clears any previously drawn shape.
    pub fn start_drawing(&mut self) -> DrawEffect {
        match self.state() {
            DrawState::Idle | DrawState::Closed => {
                self.vertices.clear();
                self.state = DrawState::Drawing;
                DrawEffect::Clear
            }
            DrawState::Drawing => DrawEffect::None,
        }
    }

    /// Accepts a map click while Drawing; ignored in any other state.
    ///
    /// A click on the exact spot of the previous vertex is dropped: the map
    /// widget delivers two click events ahead of a double-click, so the
    /// finish gesture would otherwise record its point twice.
    pub fn add_vertex(&mut self, lat: f64, lng: f64) -> DrawEffect {
        if self.state() != DrawState::Drawing {
            return DrawEffect::None;
        }
        if self.vertices.last() == Some(&[lat, lng]) {
            return DrawEffect::None;
        }
        self.vertices.push([lat, lng]);
        DrawEffect::Redraw
    }

    /// Drawing → Closed, only once the accumulated vertices form a valid
    /// ring. With fewer than 3 distinct vertices this is a no-op and the
    /// engine stays in Drawing; it never fabricates a degenerate polygon.
    pub fn finish(&mut self) -> DrawEffect {
        if self.state() != DrawState::Drawing {
            return DrawEffect::None;
        }
        if to_closed_ring(&as_lng_lat(&self.vertices)).is_err() {
            return DrawEffect::None;
        }
        self.state = DrawState::Closed;
        DrawEffect::Finished
    }

    /// Drawing → Idle, dropping the uncommitted shape.
    pub fn cancel(&mut self) -> DrawEffect {
        if self.state() != DrawState::Drawing {
            return DrawEffect::None;
        }
        self.vertices.clear();
        self.state = DrawState::Idle;
        DrawEffect::Clear
    }

    /// The completed ring as persisted GeoJSON. Only valid in Closed; does
    /// not persist anything itself.
    pub fn export_polygon(&self) -> Result<Polygon, GeoError> {
        if self.state() != DrawState::Closed {
            return Err(GeoError::TooFewVertices(self.vertices.len()));
        }
        to_closed_ring(&as_lng_lat(&self.vertices))
    }
}

fn as_lng_lat(vertices: &[[f64; 2]]) -> Vec<[f64; 2]> {
    crate::model::geo::screen_points_to_path(vertices)
}

#[cfg(feature = "web")]
pub use session::DrawSession;

/// Map wiring for a drawing session.
///
/// All listeners (map click, double-click to finish, Escape to cancel) are
/// attached when the session begins and detached when it is dropped. The
/// owning page drops the session before tearing down the surface, and every
/// handler also checks the surface liveness flag, so no handler can fire
/// against a stale map.
#[cfg(feature = "web")]
mod session {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::client::map::leaflet::{self, Layer, LeafletMap, Options};
    use crate::client::map::surface::{ClickHandle, MapSurface};
    use crate::model::geo::{GeoError, Polygon};

    use super::{DrawEffect, DrawState, DrawingEngine};

    const DRAFT_COLOR: &str = "#f9a825";

    /// Detaches a document-level keydown listener on drop.
    struct EscapeGuard {
        closure: Closure<dyn FnMut(web_sys::KeyboardEvent)>,
    }

    impl Drop for EscapeGuard {
        fn drop(&mut self) {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    self.closure.as_ref().unchecked_ref(),
                );
            }
        }
    }

    pub struct DrawSession {
        engine: Rc<RefCell<DrawingEngine>>,
        shape: Rc<RefCell<Option<Layer>>>,
        map: LeafletMap,
        _click: ClickHandle,
        _dblclick: ClickHandle,
        _escape: EscapeGuard,
    }

    impl DrawSession {
        /// Starts drawing on the given surface. `on_state` is called after
        /// every transition so the owning component can mirror the state.
        pub fn begin(
            surface: &MapSurface,
            on_state: impl FnMut(DrawState) + 'static,
        ) -> Result<Self, String> {
            // Shared by the finish and cancel listeners, hence the RefCell.
            let on_state: Rc<RefCell<dyn FnMut(DrawState)>> =
                Rc::new(RefCell::new(on_state));
            let engine = Rc::new(RefCell::new(DrawingEngine::new()));
            engine.borrow_mut().start_drawing();

            let shape: Rc<RefCell<Option<Layer>>> = Rc::new(RefCell::new(None));
            let map = surface.map().clone();
            // The finish gesture must not also zoom the map.
            map.double_click_zoom().disable();

            let click = {
                let engine = Rc::clone(&engine);
                let shape = Rc::clone(&shape);
                let map = map.clone();
                surface.on_click(move |lat, lng| {
                    let effect = engine.borrow_mut().add_vertex(lat, lng);
                    if effect != DrawEffect::Redraw {
                        return;
                    }
                    let vertices = engine.borrow().vertices().to_vec();
                    let latlngs = leaflet::lat_lngs(&vertices);
                    let mut slot = shape.borrow_mut();
                    match slot.as_ref() {
                        Some(layer) => layer.set_lat_lngs(&latlngs),
                        None => {
                            // First click: the open shape is a polyline
                            // until the ring is finished.
                            let layer = leaflet::new_polyline(
                                &latlngs,
                                &Options::new()
                                    .set("color", DRAFT_COLOR)
                                    .set("weight", 3.0)
                                    .set("dashArray", "4 4")
                                    .build(),
                            );
                            layer.add_to_map(&map);
                            *slot = Some(layer);
                        }
                    }
                })
            };

            let dblclick = {
                let engine = Rc::clone(&engine);
                let shape = Rc::clone(&shape);
                let map = map.clone();
                let on_state = Rc::clone(&on_state);
                surface.on_double_click(move || {
                    // A finish attempt below 3 distinct vertices is a no-op
                    // and the session stays in Drawing.
                    if engine.borrow_mut().finish() != DrawEffect::Finished {
                        return;
                    }
                    let vertices = engine.borrow().vertices().to_vec();
                    let mut slot = shape.borrow_mut();
                    if let Some(layer) = slot.take() {
                        layer.remove_layer();
                    }
                    let layer = leaflet::new_polygon(
                        &leaflet::lat_lngs(&vertices),
                        &Options::new()
                            .set("color", DRAFT_COLOR)
                            .set("weight", 3.0)
                            .set("fillColor", DRAFT_COLOR)
                            .set("fillOpacity", 0.3)
                            .build(),
                    );
                    layer.add_to_map(&map);
                    *slot = Some(layer);
                    (on_state.borrow_mut())(DrawState::Closed);
                })
            };

            let escape = {
                let engine = Rc::clone(&engine);
                let shape = Rc::clone(&shape);
                let on_state = Rc::clone(&on_state);
                let closure: Closure<dyn FnMut(web_sys::KeyboardEvent)> =
                    Closure::new(move |event: web_sys::KeyboardEvent| {
                        if event.key() != "Escape" {
                            return;
                        }
                        if engine.borrow_mut().cancel() != DrawEffect::Clear {
                            return;
                        }
                        if let Some(layer) = shape.borrow_mut().take() {
                            layer.remove_layer();
                        }
                        (on_state.borrow_mut())(DrawState::Idle);
                    });

                let document = web_sys::window()
                    .and_then(|w| w.document())
                    .ok_or_else(|| "No document available".to_string())?;
                document
                    .add_event_listener_with_callback(
                        "keydown",
                        closure.as_ref().unchecked_ref(),
                    )
                    .map_err(|_| "Failed to attach cancel listener".to_string())?;
                EscapeGuard { closure }
            };

            (on_state.borrow_mut())(DrawState::Drawing);

            Ok(Self {
                engine,
                shape,
                map,
                _click: click,
                _dblclick: dblclick,
                _escape: escape,
            })
        }

        pub fn state(&self) -> DrawState {
            self.engine.borrow().state()
        }

        /// The completed ring, once the session is Closed.
        pub fn export_polygon(&self) -> Result<Polygon, GeoError> {
            self.engine.borrow().export_polygon()
        }
    }

    impl Drop for DrawSession {
        fn drop(&mut self) {
            // Listener handles detach themselves; the uncommitted shape must
            // not survive the session either.
            if let Some(layer) = self.shape.borrow_mut().take() {
                layer.remove_layer();
            }
            self.map.double_click_zoom().enable();
        }
    }
}
