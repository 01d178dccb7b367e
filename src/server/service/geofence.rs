use sea_orm::DatabaseConnection;
use tokio::sync::broadcast;

use crate::{
    model::{
        geofence::{
            CenterStatus, CreateDisasterZoneDto, CreateEvacuationCenterDto,
            CreateEvacuationRouteDto, DisasterZoneDto, EvacuationCenterDto, EvacuationRouteDto,
        },
        stream::{
            ChangeEvent, DISASTER_ZONE_TABLE, EVACUATION_CENTER_TABLE, EVACUATION_ROUTE_TABLE,
        },
    },
    server::{
        data::geofence::{
            center::EvacuationCenterRepository, route::EvacuationRouteRepository,
            zone::DisasterZoneRepository,
        },
        error::{geofence::GeofenceError, Error},
    },
};

pub struct GeofenceService<'a> {
    db: &'a DatabaseConnection,
    events: &'a broadcast::Sender<ChangeEvent>,
}

impl<'a> GeofenceService<'a> {
    /// Creates a new instance of [`GeofenceService`]
    pub fn new(db: &'a DatabaseConnection, events: &'a broadcast::Sender<ChangeEvent>) -> Self {
        Self { db, events }
    }

    pub async fn get_zones(&self, barangay_id: i32) -> Result<Vec<DisasterZoneDto>, Error> {
        let repository = DisasterZoneRepository::new(self.db);

        let rows = repository.get_by_barangay(barangay_id).await?;

        Ok(rows
            .into_iter()
            .map(DisasterZoneDto::try_from)
            .collect::<Result<Vec<_>, _>>()?)
    }

    /// Validates the submitted ring before any insert, so a rejection tells
    /// the caller which half failed: a 400 means validation, a 500 means the
    /// insert itself.
    pub async fn create_zone(&self, dto: &CreateDisasterZoneDto) -> Result<DisasterZoneDto, Error> {
        let repository = DisasterZoneRepository::new(self.db);

        dto.polygon_coords
            .outer_ring()
            .map_err(GeofenceError::InvalidPolygon)?;
        let polygon_json = serde_json::to_string(&dto.polygon_coords)?;

        let model = repository.create(dto, polygon_json).await?;
        let zone = DisasterZoneDto::try_from(model)?;

        self.publish(ChangeEvent::insert(
            DISASTER_ZONE_TABLE,
            zone.barangay_id,
            serde_json::to_value(&zone)?,
        ));

        Ok(zone)
    }

    pub async fn delete_zone(&self, id: i32) -> Result<(), Error> {
        let repository = DisasterZoneRepository::new(self.db);

        let model = repository
            .find_by_id(id)
            .await?
            .ok_or(GeofenceError::ZoneNotFound(id))?;
        let zone = DisasterZoneDto::try_from(model)?;

        repository.delete(id).await?;

        self.publish(ChangeEvent::delete(
            DISASTER_ZONE_TABLE,
            zone.barangay_id,
            serde_json::to_value(&zone)?,
        ));

        Ok(())
    }

    pub async fn get_routes(&self, barangay_id: i32) -> Result<Vec<EvacuationRouteDto>, Error> {
        let repository = EvacuationRouteRepository::new(self.db);

        let rows = repository.get_by_barangay(barangay_id).await?;

        Ok(rows
            .into_iter()
            .map(EvacuationRouteDto::try_from)
            .collect::<Result<Vec<_>, _>>()?)
    }

    pub async fn create_route(
        &self,
        dto: &CreateEvacuationRouteDto,
    ) -> Result<EvacuationRouteDto, Error> {
        let repository = EvacuationRouteRepository::new(self.db);

        if dto.route_coords.len() < 2 {
            return Err(GeofenceError::TooFewRoutePoints(dto.route_coords.len()).into());
        }
        let coords_json = serde_json::to_string(&dto.route_coords)?;

        let model = repository.create(dto, coords_json).await?;
        let route = EvacuationRouteDto::try_from(model)?;

        self.publish(ChangeEvent::insert(
            EVACUATION_ROUTE_TABLE,
            route.barangay_id,
            serde_json::to_value(&route)?,
        ));

        Ok(route)
    }

    pub async fn delete_route(&self, id: i32) -> Result<(), Error> {
        let repository = EvacuationRouteRepository::new(self.db);

        let model = repository
            .find_by_id(id)
            .await?
            .ok_or(GeofenceError::RouteNotFound(id))?;
        let route = EvacuationRouteDto::try_from(model)?;

        repository.delete(id).await?;

        self.publish(ChangeEvent::delete(
            EVACUATION_ROUTE_TABLE,
            route.barangay_id,
            serde_json::to_value(&route)?,
        ));

        Ok(())
    }

    pub async fn get_centers(&self, barangay_id: i32) -> Result<Vec<EvacuationCenterDto>, Error> {
        let repository = EvacuationCenterRepository::new(self.db);

        let rows = repository.get_by_barangay(barangay_id).await?;

        Ok(rows
            .into_iter()
            .map(EvacuationCenterDto::try_from)
            .collect::<Result<Vec<_>, _>>()?)
    }

    pub async fn create_center(
        &self,
        dto: &CreateEvacuationCenterDto,
    ) -> Result<EvacuationCenterDto, Error> {
        let repository = EvacuationCenterRepository::new(self.db);

        if dto.capacity < 0 || dto.current_occupancy < 0 {
            return Err(GeofenceError::NegativeCount.into());
        }
        let facilities_json = if dto.facilities.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&dto.facilities)?)
        };

        let model = repository.create(dto, facilities_json).await?;
        let center = EvacuationCenterDto::try_from(model)?;

        self.publish(ChangeEvent::insert(
            EVACUATION_CENTER_TABLE,
            center.barangay_id,
            serde_json::to_value(&center)?,
        ));

        Ok(center)
    }

    /// Status is operator-editable independent of occupancy; a center at
    /// capacity is not forced to `full` here.
    pub async fn update_center_status(
        &self,
        id: i32,
        status: CenterStatus,
    ) -> Result<EvacuationCenterDto, Error> {
        let repository = EvacuationCenterRepository::new(self.db);

        let previous = repository
            .find_by_id(id)
            .await?
            .ok_or(GeofenceError::CenterNotFound(id))?;
        let previous = EvacuationCenterDto::try_from(previous)?;

        let updated = repository
            .update_status(id, status.as_str())
            .await?
            .ok_or(GeofenceError::CenterNotFound(id))?;
        let center = EvacuationCenterDto::try_from(updated)?;

        self.publish(ChangeEvent::update(
            EVACUATION_CENTER_TABLE,
            center.barangay_id,
            serde_json::to_value(&center)?,
            Some(serde_json::to_value(&previous)?),
        ));

        Ok(center)
    }

    pub async fn update_center_occupancy(
        &self,
        id: i32,
        current_occupancy: i32,
    ) -> Result<EvacuationCenterDto, Error> {
        let repository = EvacuationCenterRepository::new(self.db);

        if current_occupancy < 0 {
            return Err(GeofenceError::NegativeCount.into());
        }

        let previous = repository
            .find_by_id(id)
            .await?
            .ok_or(GeofenceError::CenterNotFound(id))?;
        let previous = EvacuationCenterDto::try_from(previous)?;

        let updated = repository
            .update_occupancy(id, current_occupancy)
            .await?
            .ok_or(GeofenceError::CenterNotFound(id))?;
        let center = EvacuationCenterDto::try_from(updated)?;

        self.publish(ChangeEvent::update(
            EVACUATION_CENTER_TABLE,
            center.barangay_id,
            serde_json::to_value(&center)?,
            Some(serde_json::to_value(&previous)?),
        ));

        Ok(center)
    }

    pub async fn delete_center(&self, id: i32) -> Result<(), Error> {
        let repository = EvacuationCenterRepository::new(self.db);

        let model = repository
            .find_by_id(id)
            .await?
            .ok_or(GeofenceError::CenterNotFound(id))?;
        let center = EvacuationCenterDto::try_from(model)?;

        repository.delete(id).await?;

        self.publish(ChangeEvent::delete(
            EVACUATION_CENTER_TABLE,
            center.barangay_id,
            serde_json::to_value(&center)?,
        ));

        Ok(())
    }

    fn publish(&self, event: ChangeEvent) {
        // Err only means no live subscribers right now.
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
mod tests {
    use bantay_test_utils::{fixtures, test_setup_with_tables, TestError, TestSetup};
    use sea_orm::DatabaseConnection;
    use tokio::sync::broadcast;

    use crate::{
        model::{
            geofence::{CenterStatus, CreateDisasterZoneDto},
            stream::{ChangeEvent, ChangeEventType, DISASTER_ZONE_TABLE},
        },
        server::error::{geofence::GeofenceError, Error},
    };

    use super::GeofenceService;

    async fn setup() -> Result<(DatabaseConnection, broadcast::Sender<ChangeEvent>), TestError> {
        let test = test_setup_with_tables!(
            entity::prelude::DisasterZone,
            entity::prelude::EvacuationRoute,
            entity::prelude::EvacuationCenter,
        )?;
        let (events, _) = broadcast::channel(8);

        Ok((test.db, events))
    }

    fn zone_dto(polygon_json: &str) -> CreateDisasterZoneDto {
        CreateDisasterZoneDto {
            barangay_id: 1,
            zone_name: "Riverside flood basin".to_string(),
            zone_type: "flood".to_string(),
            risk_level: "high".to_string(),
            polygon_coords: serde_json::from_str(polygon_json).unwrap(),
            notes: None,
        }
    }

    /// Expect a valid zone to save and broadcast an insert event
    #[tokio::test]
    async fn test_create_zone_success() -> Result<(), TestError> {
        let (db, events) = setup().await?;
        let mut subscriber = events.subscribe();
        let service = GeofenceService::new(&db, &events);

        let zone = service
            .create_zone(&zone_dto(fixtures::geofence::TEST_POLYGON_JSON))
            .await
            .unwrap();

        assert_eq!(zone.zone_type, "flood");

        let event = subscriber.try_recv().unwrap();
        assert_eq!(event.table, DISASTER_ZONE_TABLE);
        assert_eq!(event.event_type, ChangeEventType::Insert);

        Ok(())
    }

    /// Expect an unclosed ring to be rejected before any insert
    #[tokio::test]
    async fn test_create_zone_rejects_unclosed_ring() -> Result<(), TestError> {
        let (db, events) = setup().await?;
        let mut subscriber = events.subscribe();
        let service = GeofenceService::new(&db, &events);

        let open_ring =
            r#"{"type":"Polygon","coordinates":[[[121.0,14.6],[121.1,14.6],[121.1,14.7]]]}"#;
        let result = service.create_zone(&zone_dto(open_ring)).await;

        assert!(matches!(
            result,
            Err(Error::GeofenceError(GeofenceError::InvalidPolygon(_)))
        ));
        assert!(subscriber.try_recv().is_err());
        assert!(service.get_zones(1).await.unwrap().is_empty());

        Ok(())
    }

    /// Expect a closed but degenerate ring to be rejected before any insert
    #[tokio::test]
    async fn test_create_zone_rejects_degenerate_ring() -> Result<(), TestError> {
        let (db, events) = setup().await?;
        let mut subscriber = events.subscribe();
        let service = GeofenceService::new(&db, &events);

        let collapsed = r#"{"type":"Polygon","coordinates":[[[121.0,14.6],[121.0,14.6],[121.0,14.6],[121.0,14.6]]]}"#;
        let result = service.create_zone(&zone_dto(collapsed)).await;

        assert!(matches!(
            result,
            Err(Error::GeofenceError(GeofenceError::InvalidPolygon(_)))
        ));
        assert!(subscriber.try_recv().is_err());
        assert!(service.get_zones(1).await.unwrap().is_empty());

        Ok(())
    }

    /// Expect a route with one point to be rejected
    #[tokio::test]
    async fn test_create_route_rejects_single_point() -> Result<(), TestError> {
        let (db, events) = setup().await?;
        let service = GeofenceService::new(&db, &events);

        let dto = crate::model::geofence::CreateEvacuationRouteDto {
            barangay_id: 1,
            route_name: "Stub".to_string(),
            route_coords: vec![[121.0, 14.6]],
            start_point: crate::model::geofence::RoutePoint {
                lat: 14.6,
                lng: 121.0,
                description: None,
            },
            end_point: crate::model::geofence::RoutePoint {
                lat: 14.6,
                lng: 121.0,
                description: None,
            },
            distance_km: None,
            estimated_time_minutes: None,
        };
        let result = service.create_route(&dto).await;

        assert!(matches!(
            result,
            Err(Error::GeofenceError(GeofenceError::TooFewRoutePoints(1)))
        ));

        Ok(())
    }

    /// Expect a negative occupancy to be rejected without touching the row
    #[tokio::test]
    async fn test_update_center_occupancy_rejects_negative() -> Result<(), TestError> {
        let (db, events) = setup().await?;
        let service = GeofenceService::new(&db, &events);

        let center = fixtures::geofence::insert_center(&db, 1, "Covered court").await?;

        let result = service.update_center_occupancy(center.id, -5).await;

        assert!(matches!(
            result,
            Err(Error::GeofenceError(GeofenceError::NegativeCount))
        ));

        let centers = service.get_centers(1).await.unwrap();
        assert_eq!(centers[0].current_occupancy, center.current_occupancy);

        Ok(())
    }

    /// Expect status updates to publish an update event with the old row
    #[tokio::test]
    async fn test_update_center_status_publishes_update() -> Result<(), TestError> {
        let (db, events) = setup().await?;
        let mut subscriber = events.subscribe();
        let service = GeofenceService::new(&db, &events);

        let center = fixtures::geofence::insert_center(&db, 1, "Covered court").await?;

        let updated = service
            .update_center_status(center.id, CenterStatus::Full)
            .await
            .unwrap();

        assert_eq!(updated.status, "full");

        let event = subscriber.try_recv().unwrap();
        assert_eq!(event.event_type, ChangeEventType::Update);
        assert_eq!(event.old.unwrap()["status"], "available");

        Ok(())
    }

    /// Expect deleting an unknown zone to report not found
    #[tokio::test]
    async fn test_delete_zone_not_found() -> Result<(), TestError> {
        let (db, events) = setup().await?;
        let service = GeofenceService::new(&db, &events);

        let result = service.delete_zone(999).await;

        assert!(matches!(
            result,
            Err(Error::GeofenceError(GeofenceError::ZoneNotFound(999)))
        ));

        Ok(())
    }

    /// Expect deletion to broadcast the removed row
    #[tokio::test]
    async fn test_delete_zone_publishes_delete() -> Result<(), TestError> {
        let (db, events) = setup().await?;
        let mut subscriber = events.subscribe();
        let service = GeofenceService::new(&db, &events);

        let zone = fixtures::geofence::insert_zone(&db, 1, "Zone A").await?;

        service.delete_zone(zone.id).await.unwrap();

        let event = subscriber.try_recv().unwrap();
        assert_eq!(event.event_type, ChangeEventType::Delete);
        assert!(event.new.is_none());
        assert_eq!(event.old.unwrap()["zone_name"], "Zone A");

        Ok(())
    }
}
