use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::emergency::{CreateEmergencyRequestDto, RequestStatus};

pub struct EmergencyRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmergencyRequestRepository<'a> {
    /// Creates a new instance of [`EmergencyRequestRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new request as Pending, stamped now.
    pub async fn create(
        &self,
        id: String,
        dto: &CreateEmergencyRequestDto,
    ) -> Result<entity::emergency_request::Model, DbErr> {
        let request = entity::emergency_request::ActiveModel {
            id: ActiveValue::Set(id),
            barangay_id: ActiveValue::Set(dto.barangay_id),
            reporter_id: ActiveValue::Set(dto.reporter_id.clone()),
            request_type: ActiveValue::Set(dto.request_type.clone()),
            status: ActiveValue::Set(RequestStatus::Pending.as_str().to_string()),
            latitude: ActiveValue::Set(dto.latitude),
            longitude: ActiveValue::Set(dto.longitude),
            details: ActiveValue::Set(dto.details.clone()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        request.insert(self.db).await
    }

    /// All requests for one barangay, newest first. Triage ordering is
    /// derived client-side; the stored order is creation time only.
    pub async fn get_by_barangay(
        &self,
        barangay_id: i32,
    ) -> Result<Vec<entity::emergency_request::Model>, DbErr> {
        entity::prelude::EmergencyRequest::find()
            .filter(entity::emergency_request::Column::BarangayId.eq(barangay_id))
            .order_by_desc(entity::emergency_request::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        id: &str,
    ) -> Result<Option<entity::emergency_request::Model>, DbErr> {
        entity::prelude::EmergencyRequest::find_by_id(id.to_string())
            .one(self.db)
            .await
    }

    /// Updates the status column only. Returns `None` when the request does
    /// not exist.
    pub async fn update_status(
        &self,
        id: &str,
        status: &str,
    ) -> Result<Option<entity::emergency_request::Model>, DbErr> {
        let Some(model) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut request: entity::emergency_request::ActiveModel = model.into();
        request.status = ActiveValue::Set(status.to_string());

        Ok(Some(request.update(self.db).await?))
    }
}

#[cfg(test)]
mod tests {
    use bantay_test_utils::{test_setup_with_tables, TestError, TestSetup};
    use sea_orm::DatabaseConnection;

    async fn setup() -> Result<DatabaseConnection, TestError> {
        let test = test_setup_with_tables!(entity::prelude::EmergencyRequest)?;

        Ok(test.db)
    }

    mod create_tests {
        use bantay_test_utils::{test_setup_with_tables, TestError, TestSetup};

        use crate::{
            model::emergency::CreateEmergencyRequestDto,
            server::data::emergency::{tests::setup, EmergencyRequestRepository},
        };

        fn report() -> CreateEmergencyRequestDto {
            CreateEmergencyRequestDto {
                barangay_id: 1,
                reporter_id: "resident-7".to_string(),
                request_type: "Fire".to_string(),
                latitude: Some(14.6),
                longitude: Some(121.0),
                details: Some("Kitchen fire, spreading".to_string()),
            }
        }

        /// Expect success when inserting a new request
        #[tokio::test]
        async fn test_create_request_success() -> Result<(), TestError> {
            let db = setup().await?;
            let repository = EmergencyRequestRepository::new(&db);

            let result = repository.create("req-1".to_string(), &report()).await;

            assert!(result.is_ok());
            let model = result.unwrap();
            assert_eq!(model.status, "Pending");
            assert_eq!(model.barangay_id, 1);

            Ok(())
        }

        /// Expect Error when the required table does not exist
        #[tokio::test]
        async fn test_create_request_error() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;
            let repository = EmergencyRequestRepository::new(&test.db);

            let result = repository.create("req-1".to_string(), &report()).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_by_barangay_tests {
        use bantay_test_utils::{fixtures, TestError};
        use chrono::NaiveDate;

        use crate::server::data::emergency::{tests::setup, EmergencyRequestRepository};

        /// Expect only the requested barangay's rows, newest first
        #[tokio::test]
        async fn test_get_by_barangay_scoped_and_ordered() -> Result<(), TestError> {
            let db = setup().await?;
            let repository = EmergencyRequestRepository::new(&db);

            let day = |d: u32| {
                NaiveDate::from_ymd_opt(2026, 3, d)
                    .unwrap()
                    .and_hms_opt(8, 0, 0)
                    .unwrap()
            };
            fixtures::emergency::insert_request(&db, "old", 1, "Pending", day(1)).await?;
            fixtures::emergency::insert_request(&db, "new", 1, "Responded", day(3)).await?;
            fixtures::emergency::insert_request(&db, "other", 2, "Pending", day(2)).await?;

            let rows = repository.get_by_barangay(1).await?;

            let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
            assert_eq!(ids, vec!["new", "old"]);

            Ok(())
        }

        /// Expect an empty list for a barangay with no requests
        #[tokio::test]
        async fn test_get_by_barangay_empty() -> Result<(), TestError> {
            let db = setup().await?;
            let repository = EmergencyRequestRepository::new(&db);

            let rows = repository.get_by_barangay(99).await?;

            assert!(rows.is_empty());

            Ok(())
        }
    }

    mod update_status_tests {
        use bantay_test_utils::{fixtures, TestError};

        use crate::server::data::emergency::{tests::setup, EmergencyRequestRepository};

        /// Expect the status column to change and nothing else
        #[tokio::test]
        async fn test_update_status_success() -> Result<(), TestError> {
            let db = setup().await?;
            let repository = EmergencyRequestRepository::new(&db);

            let inserted = fixtures::emergency::insert_pending_request(&db, "req-1", 1).await?;

            let updated = repository.update_status("req-1", "In Progress").await?;

            assert!(updated.is_some());
            let updated = updated.unwrap();
            assert_eq!(updated.status, "In Progress");
            assert_eq!(updated.created_at, inserted.created_at);
            assert_eq!(updated.request_type, inserted.request_type);

            Ok(())
        }

        /// Expect None for an id that does not exist
        #[tokio::test]
        async fn test_update_status_missing() -> Result<(), TestError> {
            let db = setup().await?;
            let repository = EmergencyRequestRepository::new(&db);

            let updated = repository.update_status("ghost", "Responded").await?;

            assert!(updated.is_none());

            Ok(())
        }
    }
}
