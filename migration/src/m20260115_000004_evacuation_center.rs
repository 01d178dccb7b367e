use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EvacuationCenter::Table)
                    .if_not_exists()
                    .col(pk_auto(EvacuationCenter::Id))
                    .col(integer(EvacuationCenter::BarangayId))
                    .col(string(EvacuationCenter::Name))
                    .col(string(EvacuationCenter::Address))
                    .col(double_null(EvacuationCenter::Latitude))
                    .col(double_null(EvacuationCenter::Longitude))
                    .col(integer(EvacuationCenter::Capacity))
                    .col(integer(EvacuationCenter::CurrentOccupancy))
                    .col(string(EvacuationCenter::Status))
                    .col(string_null(EvacuationCenter::ContactPerson))
                    .col(string_null(EvacuationCenter::ContactPhone))
                    .col(text_null(EvacuationCenter::Facilities))
                    .col(text_null(EvacuationCenter::Notes))
                    .col(timestamp(EvacuationCenter::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EvacuationCenter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EvacuationCenter {
    Table,
    Id,
    BarangayId,
    Name,
    Address,
    Latitude,
    Longitude,
    Capacity,
    CurrentOccupancy,
    Status,
    ContactPerson,
    ContactPhone,
    Facilities,
    Notes,
    CreatedAt,
}
