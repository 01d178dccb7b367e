use sea_orm::DatabaseConnection;
use tokio::sync::broadcast;

use crate::model::stream::ChangeEvent;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Change-event hub. Every mutation publishes here; the SSE endpoint
    /// subscribes per connection.
    pub events: broadcast::Sender<ChangeEvent>,
}

/// Builds state around an existing connection with a fresh event hub.
/// Used by test setups to construct state without the startup path.
impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            events: crate::server::startup::build_event_hub(
                crate::server::config::DEFAULT_EVENT_BUFFER,
            ),
        }
    }
}
