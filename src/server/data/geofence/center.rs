use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::geofence::CreateEvacuationCenterDto;

pub struct EvacuationCenterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EvacuationCenterRepository<'a> {
    /// Creates a new instance of [`EvacuationCenterRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a center row. `facilities_json` is the serialized facility
    /// list, `None` when the list is empty.
    pub async fn create(
        &self,
        dto: &CreateEvacuationCenterDto,
        facilities_json: Option<String>,
    ) -> Result<entity::evacuation_center::Model, DbErr> {
        let center = entity::evacuation_center::ActiveModel {
            barangay_id: ActiveValue::Set(dto.barangay_id),
            name: ActiveValue::Set(dto.name.clone()),
            address: ActiveValue::Set(dto.address.clone()),
            latitude: ActiveValue::Set(dto.latitude),
            longitude: ActiveValue::Set(dto.longitude),
            capacity: ActiveValue::Set(dto.capacity),
            current_occupancy: ActiveValue::Set(dto.current_occupancy),
            status: ActiveValue::Set(dto.status.as_str().to_string()),
            contact_person: ActiveValue::Set(dto.contact_person.clone()),
            contact_phone: ActiveValue::Set(dto.contact_phone.clone()),
            facilities: ActiveValue::Set(facilities_json),
            notes: ActiveValue::Set(dto.notes.clone()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        center.insert(self.db).await
    }

    pub async fn get_by_barangay(
        &self,
        barangay_id: i32,
    ) -> Result<Vec<entity::evacuation_center::Model>, DbErr> {
        entity::prelude::EvacuationCenter::find()
            .filter(entity::evacuation_center::Column::BarangayId.eq(barangay_id))
            .order_by_desc(entity::evacuation_center::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::evacuation_center::Model>, DbErr> {
        entity::prelude::EvacuationCenter::find_by_id(id).one(self.db).await
    }

    /// Updates the status column only. Returns `None` when the center does
    /// not exist.
    pub async fn update_status(
        &self,
        id: i32,
        status: &str,
    ) -> Result<Option<entity::evacuation_center::Model>, DbErr> {
        let Some(model) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut center: entity::evacuation_center::ActiveModel = model.into();
        center.status = ActiveValue::Set(status.to_string());

        Ok(Some(center.update(self.db).await?))
    }

    /// Updates the occupancy column only. Returns `None` when the center does
    /// not exist.
    pub async fn update_occupancy(
        &self,
        id: i32,
        current_occupancy: i32,
    ) -> Result<Option<entity::evacuation_center::Model>, DbErr> {
        let Some(model) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut center: entity::evacuation_center::ActiveModel = model.into();
        center.current_occupancy = ActiveValue::Set(current_occupancy);

        Ok(Some(center.update(self.db).await?))
    }

    /// Deletes a center
    ///
    /// Returns OK regardless of the center existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::EvacuationCenter::delete_by_id(id).exec(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use bantay_test_utils::{fixtures, test_setup_with_tables, TestError, TestSetup};
    use sea_orm::DatabaseConnection;

    use crate::model::geofence::{CenterStatus, CreateEvacuationCenterDto};

    use super::EvacuationCenterRepository;

    async fn setup() -> Result<DatabaseConnection, TestError> {
        let test = test_setup_with_tables!(entity::prelude::EvacuationCenter)?;

        Ok(test.db)
    }

    fn center_dto(barangay_id: i32) -> CreateEvacuationCenterDto {
        CreateEvacuationCenterDto {
            barangay_id,
            name: "Covered court".to_string(),
            address: "123 Sampaguita St".to_string(),
            latitude: Some(14.6),
            longitude: Some(121.0),
            capacity: 200,
            current_occupancy: 0,
            status: CenterStatus::Available,
            contact_person: None,
            contact_phone: None,
            facilities: vec!["water".to_string()],
            notes: None,
        }
    }

    /// Expect success when inserting a center
    #[tokio::test]
    async fn test_create_center_success() -> Result<(), TestError> {
        let db = setup().await?;
        let repository = EvacuationCenterRepository::new(&db);

        let result = repository
            .create(&center_dto(1), Some(r#"["water"]"#.to_string()))
            .await;

        assert!(result.is_ok());
        let model = result.unwrap();
        assert_eq!(model.status, "available");
        assert_eq!(model.capacity, 200);

        Ok(())
    }

    /// Expect Error when the required table does not exist
    #[tokio::test]
    async fn test_create_center_error() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        let repository = EvacuationCenterRepository::new(&test.db);

        let result = repository.create(&center_dto(1), None).await;

        assert!(result.is_err());

        Ok(())
    }

    /// Expect the status column to change without touching occupancy
    #[tokio::test]
    async fn test_update_status_success() -> Result<(), TestError> {
        let db = setup().await?;
        let repository = EvacuationCenterRepository::new(&db);

        let center = fixtures::geofence::insert_center(&db, 1, "Covered court").await?;

        let updated = repository.update_status(center.id, "full").await?;

        assert!(updated.is_some());
        let updated = updated.unwrap();
        assert_eq!(updated.status, "full");
        assert_eq!(updated.current_occupancy, center.current_occupancy);

        Ok(())
    }

    /// Expect the occupancy column to change without touching status
    #[tokio::test]
    async fn test_update_occupancy_success() -> Result<(), TestError> {
        let db = setup().await?;
        let repository = EvacuationCenterRepository::new(&db);

        let center = fixtures::geofence::insert_center(&db, 1, "Covered court").await?;

        let updated = repository.update_occupancy(center.id, 42).await?;

        assert!(updated.is_some());
        let updated = updated.unwrap();
        assert_eq!(updated.current_occupancy, 42);
        assert_eq!(updated.status, center.status);

        Ok(())
    }

    /// Expect None when updating a center that does not exist
    #[tokio::test]
    async fn test_update_missing_center() -> Result<(), TestError> {
        let db = setup().await?;
        let repository = EvacuationCenterRepository::new(&db);

        assert!(repository.update_status(999, "closed").await?.is_none());
        assert!(repository.update_occupancy(999, 10).await?.is_none());

        Ok(())
    }

    /// Expect rows_affected 1 on delete and 0 when already gone
    #[tokio::test]
    async fn test_delete_center() -> Result<(), TestError> {
        let db = setup().await?;
        let repository = EvacuationCenterRepository::new(&db);

        let center = fixtures::geofence::insert_center(&db, 1, "Covered court").await?;

        let first = repository.delete(center.id).await?;
        assert_eq!(first.rows_affected, 1);

        let second = repository.delete(center.id).await?;
        assert_eq!(second.rows_affected, 0);

        Ok(())
    }
}
