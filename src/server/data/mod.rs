//! Database repositories.
//!
//! One repository struct per table, holding a borrowed connection. Repositories
//! are plain row access; scoping rules and event publishing live in the
//! service layer.

pub mod emergency;
pub mod geofence;
