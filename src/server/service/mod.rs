//! Business logic services.
//!
//! Services validate input, call repositories, and publish change events to
//! the hub after every successful mutation.

pub mod emergency;
pub mod geofence;
