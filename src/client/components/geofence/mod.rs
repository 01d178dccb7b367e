pub mod centers_panel;
pub mod zone_form;

pub use centers_panel::CentersPanel;
pub use zone_form::ZoneForm;
