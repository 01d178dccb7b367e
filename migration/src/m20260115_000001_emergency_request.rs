use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmergencyRequest::Table)
                    .if_not_exists()
                    .col(string(EmergencyRequest::Id).primary_key())
                    .col(integer(EmergencyRequest::BarangayId))
                    .col(string(EmergencyRequest::ReporterId))
                    .col(string(EmergencyRequest::RequestType))
                    .col(string(EmergencyRequest::Status))
                    .col(double_null(EmergencyRequest::Latitude))
                    .col(double_null(EmergencyRequest::Longitude))
                    .col(text_null(EmergencyRequest::Details))
                    .col(timestamp(EmergencyRequest::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_emergency_request_barangay_id")
                    .table(EmergencyRequest::Table)
                    .col(EmergencyRequest::BarangayId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmergencyRequest::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum EmergencyRequest {
    Table,
    Id,
    BarangayId,
    ReporterId,
    RequestType,
    Status,
    Latitude,
    Longitude,
    Details,
    CreatedAt,
}
