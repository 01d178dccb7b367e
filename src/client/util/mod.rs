#[cfg(feature = "web")]
pub mod api;
#[cfg(feature = "web")]
pub mod stream;
