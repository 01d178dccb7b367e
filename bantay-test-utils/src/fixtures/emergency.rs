use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::error::TestError;

/// Inserts an emergency request row with the given id, status, and timestamp.
pub async fn insert_request(
    db: &sea_orm::DatabaseConnection,
    id: &str,
    barangay_id: i32,
    status: &str,
    created_at: NaiveDateTime,
) -> Result<entity::emergency_request::Model, TestError> {
    let request = entity::emergency_request::ActiveModel {
        id: ActiveValue::Set(id.to_string()),
        barangay_id: ActiveValue::Set(barangay_id),
        reporter_id: ActiveValue::Set(format!("reporter-{}", id)),
        request_type: ActiveValue::Set("Fire".to_string()),
        status: ActiveValue::Set(status.to_string()),
        latitude: ActiveValue::Set(Some(14.6)),
        longitude: ActiveValue::Set(Some(121.0)),
        details: ActiveValue::Set(None),
        created_at: ActiveValue::Set(created_at),
    };

    Ok(request.insert(db).await?)
}

/// Inserts a Pending request stamped now, for tests that only need a row.
pub async fn insert_pending_request(
    db: &sea_orm::DatabaseConnection,
    id: &str,
    barangay_id: i32,
) -> Result<entity::emergency_request::Model, TestError> {
    insert_request(db, id, barangay_id, "Pending", Utc::now().naive_utc()).await
}
