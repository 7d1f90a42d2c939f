//! Health checkup entity for SeaORM.
//!
//! All vitals are nullable; absent measurements are stored as NULL so that
//! SQL AVG skips them instead of dragging averages toward zero.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "health_checks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub employee_name: String,
    pub heart_rate: Option<i32>,
    pub blood_pressure_systolic: Option<i32>,
    pub blood_pressure_diastolic: Option<i32>,
    pub temperature: Option<f64>,
    pub spo2: Option<i32>,
    pub weight: Option<f64>,
    pub blood_sugar: Option<f64>,
    pub cholesterol: Option<f64>,
    pub measured_at: DateTimeUtc,
    pub notes: Option<String>,
    pub signature_data: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
