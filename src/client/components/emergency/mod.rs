pub mod feed;
pub mod status_dialog;

pub use feed::EmergencyFeed;
pub use status_dialog::StatusDialog;
