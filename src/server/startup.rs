use tokio::sync::broadcast;

use crate::{
    model::stream::ChangeEvent,
    server::{config::Config, error::Error},
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run database migrations.");

    Ok(db)
}

/// Create the change-event hub shared by mutation services and the SSE endpoint.
pub fn build_event_hub(capacity: usize) -> broadcast::Sender<ChangeEvent> {
    let (sender, _) = broadcast::channel(capacity);
    sender
}
