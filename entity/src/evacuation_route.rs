use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evacuation_route")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub barangay_id: i32,
    pub route_name: String,
    /// Ordered, non-closed [lng, lat] sequence stored as JSON text.
    #[sea_orm(column_type = "Text")]
    pub route_coords: String,
    pub start_lat: f64,
    pub start_lng: f64,
    pub start_description: Option<String>,
    pub end_lat: f64,
    pub end_lng: f64,
    pub end_description: Option<String>,
    pub distance_km: Option<f64>,
    pub estimated_time_minutes: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
