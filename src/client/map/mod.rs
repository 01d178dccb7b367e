pub mod draw;

#[cfg(feature = "web")]
pub mod leaflet;
#[cfg(feature = "web")]
pub mod render;
#[cfg(feature = "web")]
pub mod surface;

/// Shared slot for the page's active drawing session.
#[cfg(feature = "web")]
pub type DrawSessionSlot = std::rc::Rc<std::cell::RefCell<Option<draw::DrawSession>>>;

/// Identity of a rendered shape, used for exclusive selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeId {
    Zone(i32),
    Route(i32),
    Center(i32),
}
