//! Health checkup models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::health_check;

/// Health checkup row as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthCheck {
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
    pub measured_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub signature_data: Option<String>,
}

impl From<health_check::Model> for HealthCheck {
    fn from(m: health_check::Model) -> Self {
        HealthCheck {
            id: m.id,
            employee_name: m.employee_name,
            heart_rate: m.heart_rate,
            blood_pressure_systolic: m.blood_pressure_systolic,
            blood_pressure_diastolic: m.blood_pressure_diastolic,
            temperature: m.temperature,
            spo2: m.spo2,
            weight: m.weight,
            blood_sugar: m.blood_sugar,
            cholesterol: m.cholesterol,
            measured_at: m.measured_at,
            notes: m.notes,
            signature_data: m.signature_data,
        }
    }
}

/// Body for `POST /health/checks`.
///
/// The measurement form submits blood pressure as `systolic_pressure` /
/// `diastolic_pressure`; they land in the `blood_pressure_*` columns.
/// Absent vitals are stored as NULL so averages skip them.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SubmitHealthCheckRequest {
    pub employee_name: String,
    pub systolic_pressure: Option<i32>,
    pub diastolic_pressure: Option<i32>,
    pub heart_rate: Option<i32>,
    pub temperature: Option<f64>,
    pub spo2: Option<i32>,
    pub weight: Option<f64>,
    pub blood_sugar: Option<f64>,
    pub cholesterol: Option<f64>,
    pub notes: Option<String>,
    pub signature: Option<String>,
}

/// Response for `GET /health/stats`.
///
/// Vital averages are rounded to whole numbers, temperature to one decimal.
/// All averages are null until at least one measurement exists.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthStats {
    pub avg_systolic: Option<f64>,
    pub avg_diastolic: Option<f64>,
    pub avg_heart_rate: Option<f64>,
    pub avg_temperature: Option<f64>,
    pub total_this_month: i64,
}
