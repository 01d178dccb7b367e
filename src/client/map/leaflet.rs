//! Minimal typed bindings for the subset of Leaflet this app uses.
//!
//! Leaflet is loaded globally from its CDN bundle (see the map page head),
//! so everything here binds against the `L` namespace.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn new_map(container_id: &str) -> LeafletMap;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = invalidateSize)]
    pub fn invalidate_size(this: &LeafletMap);

    #[wasm_bindgen(method)]
    pub fn remove(this: &LeafletMap);

    #[wasm_bindgen(method)]
    pub fn on(this: &LeafletMap, event: &str, handler: &JsValue);

    #[wasm_bindgen(method)]
    pub fn off(this: &LeafletMap, event: &str, handler: &JsValue);

    #[wasm_bindgen(method, getter, js_name = doubleClickZoom)]
    pub fn double_click_zoom(this: &LeafletMap) -> InteractionHandler;

    /// One of the map's toggleable interaction handlers, e.g. `doubleClickZoom`.
    pub type InteractionHandler;

    #[wasm_bindgen(method)]
    pub fn enable(this: &InteractionHandler);

    #[wasm_bindgen(method)]
    pub fn disable(this: &InteractionHandler);

    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn new_tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    /// Any vector layer: polyline, polygon, or circle marker.
    pub type Layer;

    #[wasm_bindgen(js_namespace = L, js_name = polyline)]
    pub fn new_polyline(latlngs: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = polygon)]
    pub fn new_polygon(latlngs: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(js_namespace = L, js_name = circleMarker)]
    pub fn new_circle_marker(latlng: &JsValue, options: &JsValue) -> Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to_map(this: &Layer, map: &LeafletMap) -> Layer;

    #[wasm_bindgen(method, js_name = remove)]
    pub fn remove_layer(this: &Layer);

    #[wasm_bindgen(method, js_name = setLatLngs)]
    pub fn set_lat_lngs(this: &Layer, latlngs: &JsValue);

    #[wasm_bindgen(method, js_name = setStyle)]
    pub fn set_style(this: &Layer, style: &JsValue);

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Layer, html: &str) -> Layer;

    #[wasm_bindgen(method, js_name = on)]
    pub fn on_layer(this: &Layer, event: &str, handler: &JsValue);

    pub type MouseEvent;

    #[wasm_bindgen(method, getter)]
    pub fn latlng(this: &MouseEvent) -> LatLng;

    pub type LatLng;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &LatLng) -> f64;
}

/// A [lat, lng] pair as the JS array Leaflet expects.
pub fn lat_lng(lat: f64, lng: f64) -> JsValue {
    let pair = Array::new();
    pair.push(&JsValue::from_f64(lat));
    pair.push(&JsValue::from_f64(lng));
    pair.into()
}

/// A sequence of [lat, lng] pairs as a nested JS array.
pub fn lat_lngs(points: &[[f64; 2]]) -> JsValue {
    let list = Array::new();
    for &[lat, lng] in points {
        list.push(&lat_lng(lat, lng));
    }
    list.into()
}

/// Builds a Leaflet options object from string/number/bool pairs.
pub struct Options(Object);

impl Options {
    pub fn new() -> Self {
        Self(Object::new())
    }

    pub fn set(self, key: &str, value: impl Into<JsValue>) -> Self {
        // Reflect only fails on non-objects; Options always wraps an Object.
        let _ = Reflect::set(&self.0, &JsValue::from_str(key), &value.into());
        self
    }

    pub fn build(self) -> JsValue {
        self.0.into()
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}
