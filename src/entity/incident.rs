//! Safety incident entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "incidents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub incident_type: Option<String>,
    pub severity: String,
    pub status: String,
    pub location: Option<String>,
    pub incident_date: Option<Date>,
    pub incident_time: Option<Time>,
    pub description: Option<String>,
    pub reporter_name: Option<String>,
    pub witnesses: Option<String>,
    pub immediate_action: Option<String>,
    pub reported_at: DateTimeUtc,
    pub completed_at: Option<DateTimeUtc>,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
