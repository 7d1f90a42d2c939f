//! Database operations for health checkups.

use sea_orm::*;

use crate::entity::health_check::{self, Entity as HealthCheckEntity};
use crate::error::{AppError, AppResult};
use crate::models::{HealthStats, SubmitHealthCheckRequest};

/// The 100 most recent checkups, newest first.
pub async fn list(db: &DatabaseConnection) -> AppResult<Vec<health_check::Model>> {
    let rows = HealthCheckEntity::find()
        .order_by_desc(health_check::Column::MeasuredAt)
        .limit(100)
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to list health checks: {}", e)))?;

    Ok(rows)
}

/// Record a checkup. Absent vitals are stored as NULL, never zero, so the
/// stats averages skip them.
pub async fn insert(
    db: &DatabaseConnection,
    req: &SubmitHealthCheckRequest,
) -> AppResult<health_check::Model> {
    let model = health_check::ActiveModel {
        employee_name: Set(req.employee_name.clone()),
        heart_rate: Set(req.heart_rate),
        blood_pressure_systolic: Set(req.systolic_pressure),
        blood_pressure_diastolic: Set(req.diastolic_pressure),
        temperature: Set(req.temperature),
        spo2: Set(req.spo2),
        weight: Set(req.weight),
        blood_sugar: Set(req.blood_sugar),
        cholesterol: Set(req.cholesterol),
        notes: Set(req.notes.clone()),
        signature_data: Set(req.signature.clone()),
        ..Default::default()
    };

    let created = model
        .insert(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert health check: {}", e)))?;

    Ok(created)
}

/// Whole-history vital averages plus a current-month checkup count, in one
/// query. Vital averages round to whole numbers, temperature to one decimal.
pub async fn stats(db: &DatabaseConnection) -> AppResult<HealthStats> {
    #[derive(Debug, FromQueryResult)]
    struct StatsRow {
        avg_systolic: Option<f64>,
        avg_diastolic: Option<f64>,
        avg_heart_rate: Option<f64>,
        avg_temperature: Option<f64>,
        total_this_month: i64,
    }

    let row = StatsRow::find_by_statement(Statement::from_string(
        DatabaseBackend::Postgres,
        "SELECT \
            ROUND(AVG(blood_pressure_systolic))::double precision AS avg_systolic, \
            ROUND(AVG(blood_pressure_diastolic))::double precision AS avg_diastolic, \
            ROUND(AVG(heart_rate))::double precision AS avg_heart_rate, \
            ROUND(AVG(temperature)::numeric, 1)::double precision AS avg_temperature, \
            COUNT(*) FILTER ( \
                WHERE DATE_TRUNC('month', measured_at) = DATE_TRUNC('month', CURRENT_DATE) \
            ) AS total_this_month \
         FROM health_checks",
    ))
    .one(db)
    .await
    .map_err(|e| AppError::Database(format!("Failed to load health stats: {}", e)))?
    .ok_or_else(|| AppError::Database("Health stats query returned no row".to_string()))?;

    Ok(HealthStats {
        avg_systolic: row.avg_systolic,
        avg_diastolic: row.avg_diastolic,
        avg_heart_rate: row.avg_heart_rate,
        avg_temperature: row.avg_temperature,
        total_this_month: row.total_this_month,
    })
}
