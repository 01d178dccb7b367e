use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct DisasterZoneRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DisasterZoneRepository<'a> {
    /// Creates a new instance of [`DisasterZoneRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a zone row. `polygon_json` is the serialized GeoJSON Polygon,
    /// already validated by the service.
    pub async fn create(
        &self,
        dto: &crate::model::geofence::CreateDisasterZoneDto,
        polygon_json: String,
    ) -> Result<entity::disaster_zone::Model, DbErr> {
        let zone = entity::disaster_zone::ActiveModel {
            barangay_id: ActiveValue::Set(dto.barangay_id),
            zone_name: ActiveValue::Set(dto.zone_name.clone()),
            zone_type: ActiveValue::Set(dto.zone_type.clone()),
            risk_level: ActiveValue::Set(dto.risk_level.clone()),
            polygon_coords: ActiveValue::Set(polygon_json),
            notes: ActiveValue::Set(dto.notes.clone()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        zone.insert(self.db).await
    }

    pub async fn get_by_barangay(
        &self,
        barangay_id: i32,
    ) -> Result<Vec<entity::disaster_zone::Model>, DbErr> {
        entity::prelude::DisasterZone::find()
            .filter(entity::disaster_zone::Column::BarangayId.eq(barangay_id))
            .order_by_desc(entity::disaster_zone::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::disaster_zone::Model>, DbErr> {
        entity::prelude::DisasterZone::find_by_id(id).one(self.db).await
    }

    /// Deletes a zone
    ///
    /// Returns OK regardless of the zone existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::DisasterZone::delete_by_id(id).exec(self.db).await
    }
}
