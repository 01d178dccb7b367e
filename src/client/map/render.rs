//! Projects persisted geofencing entities onto a map surface.
//!
//! `render` always replaces the full rendered set: every previously drawn
//! layer is removed before the new set is added, so re-rendering with the
//! same entities leaves exactly one shape per entity. Selection is
//! exclusive and popups are read-only summaries; editing happens in the
//! side panel, never inside a popup.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus_logger::tracing;
use wasm_bindgen::prelude::*;

use crate::model::geo::{color_for, fill_opacity_for, path_to_screen_points, ring_to_screen_points};
use crate::model::geofence::{DisasterZoneDto, EvacuationCenterDto, EvacuationRouteDto};

use super::leaflet::{self, Layer, Options};
use super::surface::MapSurface;
use super::ShapeId;

const STROKE_WEIGHT: f64 = 2.0;
const SELECTED_STROKE_WEIGHT: f64 = 5.0;

struct RenderedShape {
    id: ShapeId,
    layer: Layer,
    base_color: &'static str,
    // Kept alive for as long as the layer is on the map.
    _click: Closure<dyn FnMut(leaflet::MouseEvent)>,
}

#[derive(Default)]
struct RendererState {
    shapes: Vec<RenderedShape>,
    selected: Option<ShapeId>,
}

impl RendererState {
    fn apply_selection(&self) {
        for shape in &self.shapes {
            let selected = self.selected == Some(shape.id);
            let weight = if selected {
                SELECTED_STROKE_WEIGHT
            } else {
                STROKE_WEIGHT
            };
            shape.layer.set_style(
                &Options::new()
                    .set("weight", weight)
                    .set("color", shape.base_color)
                    .build(),
            );
        }
    }
}

/// Renders zones, routes, and centers for one map surface.
pub struct ShapeRenderer {
    state: Rc<RefCell<RendererState>>,
    // Shared with every per-layer click listener, hence the RefCell.
    on_select: Rc<RefCell<dyn FnMut(Option<ShapeId>)>>,
}

impl ShapeRenderer {
    /// `on_select` is invoked whenever the exclusive selection changes,
    /// letting the owning component mirror it into its own state.
    pub fn new(on_select: impl FnMut(Option<ShapeId>) + 'static) -> Self {
        Self {
            state: Rc::new(RefCell::new(RendererState::default())),
            on_select: Rc::new(RefCell::new(on_select)),
        }
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.state.borrow().selected
    }

    /// Replaces the entire rendered set with the given entities.
    pub fn render(
        &self,
        surface: &MapSurface,
        zones: &[DisasterZoneDto],
        routes: &[EvacuationRouteDto],
        centers: &[EvacuationCenterDto],
    ) {
        self.clear();

        for zone in zones {
            match ring_to_screen_points(&zone.polygon_coords) {
                Ok(points) => {
                    let color = color_for(&zone.zone_type);
                    let layer = leaflet::new_polygon(
                        &leaflet::lat_lngs(&points),
                        &Options::new()
                            .set("color", color)
                            .set("weight", STROKE_WEIGHT)
                            .set("fillColor", color)
                            .set("fillOpacity", fill_opacity_for(&zone.risk_level))
                            .build(),
                    );
                    layer.bind_popup(&zone_popup(zone));
                    self.add(surface, layer, ShapeId::Zone(zone.id), color);
                }
                Err(err) => {
                    // A malformed stored ring should not take down the page.
                    tracing::warn!("Skipping zone {} with invalid polygon: {}", zone.id, err);
                }
            }
        }

        for route in routes {
            let points = path_to_screen_points(&route.route_coords);
            let layer = leaflet::new_polyline(
                &leaflet::lat_lngs(&points),
                &Options::new()
                    .set("color", "#2e7d32")
                    .set("weight", STROKE_WEIGHT)
                    .set("dashArray", "6 4")
                    .build(),
            );
            layer.bind_popup(&route_popup(route));
            self.add(surface, layer, ShapeId::Route(route.id), "#2e7d32");
        }

        for center in centers {
            let (Some(lat), Some(lng)) = (center.latitude, center.longitude) else {
                continue;
            };
            let layer = leaflet::new_circle_marker(
                &leaflet::lat_lng(lat, lng),
                &Options::new()
                    .set("radius", 8.0)
                    .set("color", "#7b1fa2")
                    .set("weight", STROKE_WEIGHT)
                    .set("fillColor", "#7b1fa2")
                    .set("fillOpacity", 0.85)
                    .build(),
            );
            layer.bind_popup(&center_popup(center));
            self.add(surface, layer, ShapeId::Center(center.id), "#7b1fa2");
        }
    }

    /// Removes every rendered layer and resets the selection.
    pub fn clear(&self) {
        let had_selection = {
            let mut state = self.state.borrow_mut();
            for shape in state.shapes.drain(..) {
                shape.layer.remove_layer();
            }
            state.selected.take().is_some()
        };
        if had_selection {
            (self.on_select.borrow_mut())(None);
        }
    }

    fn add(&self, surface: &MapSurface, layer: Layer, id: ShapeId, base_color: &'static str) {
        layer.add_to_map(surface.map());

        let state = Rc::clone(&self.state);
        let on_select = Rc::clone(&self.on_select);
        let click = Closure::new(move |_event: leaflet::MouseEvent| {
            {
                let mut state = state.borrow_mut();
                // Clicking a shape selects it and deselects every other shape.
                state.selected = Some(id);
                state.apply_selection();
            }
            (on_select.borrow_mut())(Some(id));
        });
        layer.on_layer("click", click.as_ref());

        self.state.borrow_mut().shapes.push(RenderedShape {
            id,
            layer,
            base_color,
            _click: click,
        });
    }
}

impl Drop for ShapeRenderer {
    fn drop(&mut self) {
        self.clear();
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn zone_popup(zone: &DisasterZoneDto) -> String {
    let notes = zone
        .notes
        .as_deref()
        .map(|n| format!("<br><span>{}</span>", escape(n)))
        .unwrap_or_default();
    format!(
        "<strong>{}</strong><br>{} zone, {} risk{}",
        escape(&zone.zone_name),
        escape(&zone.zone_type),
        escape(&zone.risk_level),
        notes
    )
}

fn route_popup(route: &EvacuationRouteDto) -> String {
    let mut summary = format!("<strong>{}</strong>", escape(&route.route_name));
    if let Some(distance) = route.distance_km {
        summary.push_str(&format!("<br>{:.1} km", distance));
    }
    if let Some(minutes) = route.estimated_time_minutes {
        summary.push_str(&format!("<br>~{} min on foot", minutes));
    }
    summary
}

fn center_popup(center: &EvacuationCenterDto) -> String {
    format!(
        "<strong>{}</strong><br>{}<br>{} / {} occupied, {}",
        escape(&center.name),
        escape(&center.address),
        center.current_occupancy,
        center.capacity,
        escape(&center.status)
    )
}
