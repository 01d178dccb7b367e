use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DisasterZone::Table)
                    .if_not_exists()
                    .col(pk_auto(DisasterZone::Id))
                    .col(integer(DisasterZone::BarangayId))
                    .col(string(DisasterZone::ZoneName))
                    .col(string(DisasterZone::ZoneType))
                    .col(string(DisasterZone::RiskLevel))
                    .col(text(DisasterZone::PolygonCoords))
                    .col(text_null(DisasterZone::Notes))
                    .col(timestamp(DisasterZone::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DisasterZone::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DisasterZone {
    Table,
    Id,
    BarangayId,
    ZoneName,
    ZoneType,
    RiskLevel,
    PolygonCoords,
    Notes,
    CreatedAt,
}
