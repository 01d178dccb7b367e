use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "disaster_zone")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub barangay_id: i32,
    pub zone_name: String,
    pub zone_type: String,
    pub risk_level: String,
    /// GeoJSON Polygon stored as its JSON text representation.
    #[sea_orm(column_type = "Text")]
    pub polygon_coords: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
