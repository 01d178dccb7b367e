pub mod emergency;
pub mod geofence;
pub mod navbar;
pub mod page;

pub use navbar::Navbar;
pub use page::Page;
