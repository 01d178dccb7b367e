use sea_orm::DatabaseConnection;
use tokio::sync::broadcast;

use crate::{
    model::{
        emergency::{CreateEmergencyRequestDto, EmergencyRequestDto, RequestStatus},
        stream::{ChangeEvent, EMERGENCY_REQUEST_TABLE},
    },
    server::{
        data::emergency::EmergencyRequestRepository,
        error::{emergency::EmergencyError, Error},
    },
};

pub struct EmergencyService<'a> {
    db: &'a DatabaseConnection,
    events: &'a broadcast::Sender<ChangeEvent>,
}

impl<'a> EmergencyService<'a> {
    /// Creates a new instance of [`EmergencyService`]
    pub fn new(db: &'a DatabaseConnection, events: &'a broadcast::Sender<ChangeEvent>) -> Self {
        Self { db, events }
    }

    /// Current requests for a barangay, newest first.
    pub async fn get_requests(&self, barangay_id: i32) -> Result<Vec<EmergencyRequestDto>, Error> {
        let repository = EmergencyRequestRepository::new(self.db);

        let rows = repository.get_by_barangay(barangay_id).await?;

        Ok(rows.into_iter().map(EmergencyRequestDto::from).collect())
    }

    /// Files a new report as Pending and broadcasts the insert to live feeds.
    pub async fn create_request(
        &self,
        dto: &CreateEmergencyRequestDto,
    ) -> Result<EmergencyRequestDto, Error> {
        let repository = EmergencyRequestRepository::new(self.db);

        let model = repository.create(generate_request_id(), dto).await?;
        let request: EmergencyRequestDto = model.into();

        self.publish(ChangeEvent::insert(
            EMERGENCY_REQUEST_TABLE,
            request.barangay_id,
            serde_json::to_value(&request)?,
        ));

        Ok(request)
    }

    /// Moves one request to a new status and broadcasts the update. The
    /// workflow does not enforce linear progression; any status in the
    /// vocabulary is accepted.
    pub async fn update_status(
        &self,
        id: &str,
        status: RequestStatus,
    ) -> Result<EmergencyRequestDto, Error> {
        let repository = EmergencyRequestRepository::new(self.db);

        let previous = repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| EmergencyError::RequestNotFound(id.to_string()))?;

        let updated = repository
            .update_status(id, status.as_str())
            .await?
            .ok_or_else(|| EmergencyError::RequestNotFound(id.to_string()))?;

        let previous: EmergencyRequestDto = previous.into();
        let updated: EmergencyRequestDto = updated.into();

        self.publish(ChangeEvent::update(
            EMERGENCY_REQUEST_TABLE,
            updated.barangay_id,
            serde_json::to_value(&updated)?,
            Some(serde_json::to_value(&previous)?),
        ));

        Ok(updated)
    }

    fn publish(&self, event: ChangeEvent) {
        // Err only means no live subscribers right now.
        let _ = self.events.send(event);
    }
}

fn generate_request_id() -> String {
    format!("{:032x}", rand::random::<u128>())
}

#[cfg(test)]
mod tests {
    use bantay_test_utils::{fixtures, test_setup_with_tables, TestError, TestSetup};
    use sea_orm::DatabaseConnection;
    use tokio::sync::broadcast;

    use crate::model::{
        emergency::{CreateEmergencyRequestDto, RequestStatus},
        stream::{ChangeEvent, ChangeEventType, EMERGENCY_REQUEST_TABLE},
    };

    use super::EmergencyService;

    async fn setup() -> Result<(DatabaseConnection, broadcast::Sender<ChangeEvent>), TestError> {
        let test = test_setup_with_tables!(entity::prelude::EmergencyRequest)?;
        let (events, _) = broadcast::channel(8);

        Ok((test.db, events))
    }

    fn report(barangay_id: i32) -> CreateEmergencyRequestDto {
        CreateEmergencyRequestDto {
            barangay_id,
            reporter_id: "resident-7".to_string(),
            request_type: "Flood".to_string(),
            latitude: Some(14.6),
            longitude: Some(121.0),
            details: None,
        }
    }

    /// Expect a Pending request and a broadcast insert event
    #[tokio::test]
    async fn test_create_request_publishes_insert() -> Result<(), TestError> {
        let (db, events) = setup().await?;
        let mut subscriber = events.subscribe();
        let service = EmergencyService::new(&db, &events);

        let created = service.create_request(&report(1)).await.unwrap();

        assert_eq!(created.status, "Pending");
        assert!(!created.id.is_empty());

        let event = subscriber.try_recv().unwrap();
        assert_eq!(event.table, EMERGENCY_REQUEST_TABLE);
        assert_eq!(event.event_type, ChangeEventType::Insert);
        assert_eq!(event.barangay_id, 1);
        assert!(event.new.is_some());
        assert!(event.old.is_none());

        Ok(())
    }

    /// Expect the update event to carry both the new and the previous row
    #[tokio::test]
    async fn test_update_status_publishes_update_with_old_row() -> Result<(), TestError> {
        let (db, events) = setup().await?;
        let mut subscriber = events.subscribe();
        let service = EmergencyService::new(&db, &events);

        fixtures::emergency::insert_pending_request(&db, "req-1", 1).await?;

        let updated = service
            .update_status("req-1", RequestStatus::InProgress)
            .await
            .unwrap();

        assert_eq!(updated.status, "In Progress");

        let event = subscriber.try_recv().unwrap();
        assert_eq!(event.event_type, ChangeEventType::Update);
        let old = event.old.unwrap();
        assert_eq!(old["status"], "Pending");
        let new = event.new.unwrap();
        assert_eq!(new["status"], "In Progress");

        Ok(())
    }

    /// Expect a not-found error and no event for an unknown id
    #[tokio::test]
    async fn test_update_status_unknown_request() -> Result<(), TestError> {
        let (db, events) = setup().await?;
        let mut subscriber = events.subscribe();
        let service = EmergencyService::new(&db, &events);

        let result = service.update_status("ghost", RequestStatus::Responded).await;

        assert!(result.is_err());
        assert!(subscriber.try_recv().is_err());

        Ok(())
    }

    /// Expect creation to succeed while nobody is subscribed
    #[tokio::test]
    async fn test_publish_without_subscribers_is_not_an_error() -> Result<(), TestError> {
        let (db, events) = setup().await?;
        let service = EmergencyService::new(&db, &events);

        let result = service.create_request(&report(1)).await;

        assert!(result.is_ok());

        Ok(())
    }
}
