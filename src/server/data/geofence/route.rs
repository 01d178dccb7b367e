use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::geofence::CreateEvacuationRouteDto;

pub struct EvacuationRouteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EvacuationRouteRepository<'a> {
    /// Creates a new instance of [`EvacuationRouteRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a route row. `coords_json` is the serialized [lng, lat] path,
    /// already length-checked by the service.
    pub async fn create(
        &self,
        dto: &CreateEvacuationRouteDto,
        coords_json: String,
    ) -> Result<entity::evacuation_route::Model, DbErr> {
        let route = entity::evacuation_route::ActiveModel {
            barangay_id: ActiveValue::Set(dto.barangay_id),
            route_name: ActiveValue::Set(dto.route_name.clone()),
            route_coords: ActiveValue::Set(coords_json),
            start_lat: ActiveValue::Set(dto.start_point.lat),
            start_lng: ActiveValue::Set(dto.start_point.lng),
            start_description: ActiveValue::Set(dto.start_point.description.clone()),
            end_lat: ActiveValue::Set(dto.end_point.lat),
            end_lng: ActiveValue::Set(dto.end_point.lng),
            end_description: ActiveValue::Set(dto.end_point.description.clone()),
            distance_km: ActiveValue::Set(dto.distance_km),
            estimated_time_minutes: ActiveValue::Set(dto.estimated_time_minutes),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        route.insert(self.db).await
    }

    pub async fn get_by_barangay(
        &self,
        barangay_id: i32,
    ) -> Result<Vec<entity::evacuation_route::Model>, DbErr> {
        entity::prelude::EvacuationRoute::find()
            .filter(entity::evacuation_route::Column::BarangayId.eq(barangay_id))
            .order_by_desc(entity::evacuation_route::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::evacuation_route::Model>, DbErr> {
        entity::prelude::EvacuationRoute::find_by_id(id).one(self.db).await
    }

    /// Deletes a route
    ///
    /// Returns OK regardless of the route existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::EvacuationRoute::delete_by_id(id).exec(self.db).await
    }
}
