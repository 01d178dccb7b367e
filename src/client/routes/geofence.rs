use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::geofence::{CentersPanel, ZoneForm};
use crate::client::components::Page;
use crate::client::map::draw::DrawState;
use crate::client::map::ShapeId;
use crate::model::geo::Polygon;
use crate::model::geofence::{DisasterZoneDto, EvacuationCenterDto, EvacuationRouteDto};

use super::ACTIVE_BARANGAY_ID;

// Default view over Metro Manila until the barangay's own extent is saved.
const MAP_CENTER: [f64; 2] = [14.5995, 120.9842];
const MAP_ZOOM: f64 = 13.0;
const MAP_CONTAINER_ID: &str = "hazard-map";

#[component]
pub fn GeofenceMapPage() -> Element {
    rsx!(
        Title { "Hazard Map | Bantay" }
        Meta {
            name: "description",
            content: "Disaster-risk zones, evacuation routes, and evacuation centers."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] p-6",
                GeofenceMap { barangay_id: ACTIVE_BARANGAY_ID }
            }
        }
    )
}

/// The hazard map view: one owned map surface, the shape renderer, and the
/// polygon drawing workflow for authoring new risk zones.
#[component]
fn GeofenceMap(barangay_id: i32) -> Element {
    let mut zones = use_signal(Vec::<DisasterZoneDto>::new);
    let mut route_list = use_signal(Vec::<EvacuationRouteDto>::new);
    let mut centers = use_signal(Vec::<EvacuationCenterDto>::new);
    let mut draw_state = use_signal(|| DrawState::Idle);
    let mut pending_polygon = use_signal(|| None::<Polygon>);
    let mut selected_shape = use_signal(|| None::<ShapeId>);
    let mut notice = use_signal(|| None::<String>);
    // Bumped after every mutation; the fetch resources read it.
    let mut refresh = use_signal(|| 0u32);

    #[cfg(feature = "web")]
    let (surface_slot, session_slot) = {
        use std::cell::RefCell;
        use std::rc::Rc;

        use dioxus_logger::tracing;

        use crate::client::map::render::ShapeRenderer;
        use crate::client::map::surface::MapSurface;
        use crate::client::map::DrawSessionSlot;
        use crate::client::util::api;

        let fetched_zones = use_resource(move || async move {
            let _ = refresh();
            api::get_disaster_zones(barangay_id).await
        });
        let fetched_routes = use_resource(move || async move {
            let _ = refresh();
            api::get_evacuation_routes(barangay_id).await
        });
        let fetched_centers = use_resource(move || async move {
            let _ = refresh();
            api::get_evacuation_centers(barangay_id).await
        });

        match &*fetched_zones.read_unchecked() {
            Some(Ok(list)) => zones.set(list.clone()),
            Some(Err(err)) => tracing::error!("Failed to fetch zones: {}", err),
            None => (),
        }
        match &*fetched_routes.read_unchecked() {
            Some(Ok(list)) => route_list.set(list.clone()),
            Some(Err(err)) => tracing::error!("Failed to fetch routes: {}", err),
            None => (),
        }
        match &*fetched_centers.read_unchecked() {
            Some(Ok(list)) => centers.set(list.clone()),
            Some(Err(err)) => tracing::error!("Failed to fetch centers: {}", err),
            None => (),
        }

        let surface_slot = use_hook(|| Rc::new(RefCell::new(None::<MapSurface>)));
        let renderer_slot = use_hook(|| Rc::new(RefCell::new(None::<ShapeRenderer>)));
        let session_slot: DrawSessionSlot = use_hook(|| Rc::new(RefCell::new(None)));

        // Mount once. The slot check makes the effect idempotent against
        // re-renders; the surface itself is torn down in use_drop.
        {
            let surface_slot = Rc::clone(&surface_slot);
            let renderer_slot = Rc::clone(&renderer_slot);
            use_effect(move || {
                if surface_slot.borrow().is_some() {
                    return;
                }
                match MapSurface::mount(MAP_CONTAINER_ID, MAP_CENTER, MAP_ZOOM) {
                    Ok(surface) => {
                        *surface_slot.borrow_mut() = Some(surface);
                        *renderer_slot.borrow_mut() = Some(ShapeRenderer::new(move |id| {
                            selected_shape.set(id);
                        }));
                    }
                    Err(err) => {
                        tracing::error!("Failed to mount hazard map: {}", err);
                        notice.set(Some(err));
                    }
                }
            });
        }

        // Re-project the persisted entities whenever any list changes. The
        // renderer replaces its full layer set each time.
        {
            let surface_slot = Rc::clone(&surface_slot);
            let renderer_slot = Rc::clone(&renderer_slot);
            use_effect(move || {
                let zones = zones();
                let routes = route_list();
                let centers = centers();
                let surface = surface_slot.borrow();
                let renderer = renderer_slot.borrow();
                if let (Some(surface), Some(renderer)) = (surface.as_ref(), renderer.as_ref()) {
                    renderer.render(surface, &zones, &routes, &centers);
                }
            });
        }

        {
            let surface_slot = Rc::clone(&surface_slot);
            let renderer_slot = Rc::clone(&renderer_slot);
            let session_slot = Rc::clone(&session_slot);
            use_drop(move || {
                // Drawing session and renderer hold listeners on the map;
                // release them before the surface itself.
                session_slot.borrow_mut().take();
                renderer_slot.borrow_mut().take();
                surface_slot.borrow_mut().take();
            });
        }

        (surface_slot, session_slot)
    };

    // Each handler owns its own clone of the shared slots.
    #[cfg(feature = "web")]
    let (start_surface, start_session) = (
        std::rc::Rc::clone(&surface_slot),
        std::rc::Rc::clone(&session_slot),
    );
    #[cfg(feature = "web")]
    let discard_session = std::rc::Rc::clone(&session_slot);
    #[cfg(feature = "web")]
    let saved_session = std::rc::Rc::clone(&session_slot);

    let start_drawing = move |_| {
        #[cfg(feature = "web")]
        {
            use std::rc::Rc;

            use dioxus_logger::tracing;

            use crate::client::map::draw::DrawSession;

            // A stale Idle session from an earlier cancel is replaced here.
            start_session.borrow_mut().take();

            let surface = start_surface.borrow();
            let Some(surface) = surface.as_ref() else {
                return;
            };

            let on_state = {
                let session_slot = Rc::clone(&start_session);
                move |state: DrawState| {
                    draw_state.set(state);
                    match state {
                        DrawState::Closed => {
                            let polygon = session_slot
                                .borrow()
                                .as_ref()
                                .and_then(|session| session.export_polygon().ok());
                            pending_polygon.set(polygon);
                        }
                        DrawState::Idle => {
                            // Cancelled. The session is dropped on a later
                            // turn because this callback can run inside one
                            // of its own listeners.
                            pending_polygon.set(None);
                            let session_slot = Rc::clone(&session_slot);
                            spawn(async move {
                                session_slot.borrow_mut().take();
                            });
                        }
                        DrawState::Drawing => (),
                    }
                }
            };

            match DrawSession::begin(surface, on_state) {
                Ok(session) => {
                    *start_session.borrow_mut() = Some(session);
                }
                Err(err) => {
                    tracing::error!("Failed to start drawing: {}", err);
                    notice.set(Some(err));
                }
            }
        }
    };

    // Shared by the toolbar button and the form's discard action.
    let discard_drawing = use_callback(move |_: ()| {
        #[cfg(feature = "web")]
        {
            discard_session.borrow_mut().take();
        }
        pending_polygon.set(None);
        draw_state.set(DrawState::Idle);
    });

    let delete_selected = move |_| {
        let Some(shape) = selected_shape() else {
            return;
        };

        #[cfg(feature = "web")]
        {
            use crate::client::util::api;

            spawn(async move {
                let result = match shape {
                    ShapeId::Zone(id) => api::delete_disaster_zone(id).await,
                    ShapeId::Route(id) => api::delete_evacuation_route(id).await,
                    ShapeId::Center(id) => api::delete_evacuation_center(id).await,
                };
                match result {
                    Ok(()) => {
                        selected_shape.set(None);
                        refresh += 1;
                    }
                    Err(err) => notice.set(Some(err)),
                }
            });
        }
    };

    let drawing_active = draw_state() == DrawState::Drawing;

    rsx! {
        div { class: "flex flex-col gap-4",
            if let Some(message) = notice() {
                div { class: "alert alert-error flex justify-between",
                    p { "{message}" }
                    button {
                        class: "btn btn-sm btn-ghost",
                        onclick: move |_| notice.set(None),
                        "Dismiss"
                    }
                }
            }

            div { class: "flex flex-wrap gap-2",
                button {
                    class: "btn btn-primary",
                    disabled: draw_state() != DrawState::Idle,
                    onclick: start_drawing,
                    "Draw Risk Zone"
                }
                if drawing_active || pending_polygon().is_some() {
                    button {
                        class: "btn",
                        onclick: move |_| discard_drawing(()),
                        "Stop Drawing"
                    }
                }
                button {
                    class: "btn btn-error btn-outline",
                    disabled: selected_shape().is_none(),
                    onclick: delete_selected,
                    "Delete Selected"
                }
            }

            if drawing_active {
                p { class: "text-sm",
                    "Click the map to add vertices, double-click to finish, Esc to cancel."
                }
            }

            div { id: MAP_CONTAINER_ID }

            if let Some(polygon) = pending_polygon() {
                ZoneForm {
                    barangay_id,
                    polygon,
                    on_saved: move |_zone| {
                        #[cfg(feature = "web")]
                        {
                            saved_session.borrow_mut().take();
                        }
                        pending_polygon.set(None);
                        draw_state.set(DrawState::Idle);
                        refresh += 1;
                    },
                    on_cancel: move |_| discard_drawing(()),
                }
            }

            CentersPanel {
                barangay_id,
                centers: centers(),
                on_mutated: move |_| refresh += 1,
            }
        }
    }
}
