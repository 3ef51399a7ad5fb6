//! Audit log entity, one row per density ranking request

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "log_use_app")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub username: String,
    pub request_timestamp: DateTimeUtc,
    pub num_countries_returned: i32,
    /// JSON array of `{name, density}` pairs
    #[sea_orm(column_type = "Text")]
    pub countries_details: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
