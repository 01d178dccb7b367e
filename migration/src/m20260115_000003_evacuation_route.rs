use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EvacuationRoute::Table)
                    .if_not_exists()
                    .col(pk_auto(EvacuationRoute::Id))
                    .col(integer(EvacuationRoute::BarangayId))
                    .col(string(EvacuationRoute::RouteName))
                    .col(text(EvacuationRoute::RouteCoords))
                    .col(double(EvacuationRoute::StartLat))
                    .col(double(EvacuationRoute::StartLng))
                    .col(string_null(EvacuationRoute::StartDescription))
                    .col(double(EvacuationRoute::EndLat))
                    .col(double(EvacuationRoute::EndLng))
                    .col(string_null(EvacuationRoute::EndDescription))
                    .col(double_null(EvacuationRoute::DistanceKm))
                    .col(integer_null(EvacuationRoute::EstimatedTimeMinutes))
                    .col(timestamp(EvacuationRoute::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EvacuationRoute::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EvacuationRoute {
    Table,
    Id,
    BarangayId,
    RouteName,
    RouteCoords,
    StartLat,
    StartLng,
    StartDescription,
    EndLat,
    EndLng,
    EndDescription,
    DistanceKm,
    EstimatedTimeMinutes,
    CreatedAt,
}
