use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evacuation_center")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub barangay_id: i32,
    pub name: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub capacity: i32,
    pub current_occupancy: i32,
    pub status: String,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
    /// JSON array of facility names, e.g. `["water","electricity"]`.
    #[sea_orm(column_type = "Text", nullable)]
    pub facilities: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
