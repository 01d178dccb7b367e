pub use sea_orm_migration::prelude::*;

mod m20260115_000001_emergency_request;
mod m20260115_000002_disaster_zone;
mod m20260115_000003_evacuation_route;
mod m20260115_000004_evacuation_center;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_emergency_request::Migration),
            Box::new(m20260115_000002_disaster_zone::Migration),
            Box::new(m20260115_000003_evacuation_route::Migration),
            Box::new(m20260115_000004_evacuation_center::Migration),
        ]
    }
}
