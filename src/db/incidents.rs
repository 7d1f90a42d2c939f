//! Database operations for safety incidents.

use chrono::{DateTime, NaiveTime, Utc};
use sea_orm::*;

use crate::entity::incident::{self, Entity as Incident};
use crate::error::{AppError, AppResult};
use crate::models::{CreateIncidentRequest, IncidentStatus, SafetyStats, Severity};

/// The 100 most recent incidents, newest first.
pub async fn list(db: &DatabaseConnection) -> AppResult<Vec<incident::Model>> {
    let rows = Incident::find()
        .order_by_desc(incident::Column::ReportedAt)
        .limit(100)
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to list incidents: {}", e)))?;

    Ok(rows)
}

/// Insert a new incident report. Enum fields are validated by the caller
/// before this runs; nothing is written for invalid values.
pub async fn insert(
    db: &DatabaseConnection,
    req: &CreateIncidentRequest,
    severity: Severity,
    status: IncidentStatus,
    incident_time: Option<NaiveTime>,
) -> AppResult<incident::Model> {
    let model = incident::ActiveModel {
        title: Set(req.title.clone()),
        incident_type: Set(req.incident_type.clone()),
        severity: Set(severity.as_str().to_string()),
        status: Set(status.as_str().to_string()),
        location: Set(req.location.clone()),
        incident_date: Set(req.incident_date),
        incident_time: Set(incident_time),
        description: Set(req.description.clone()),
        reporter_name: Set(req.reporter_name.clone()),
        witnesses: Set(req.witnesses.clone()),
        immediate_action: Set(req.immediate_action.clone()),
        ..Default::default()
    };

    let created = model
        .insert(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert incident: {}", e)))?;

    Ok(created)
}

/// Transition an incident's status in a single UPDATE.
///
/// Entering `selesai` stamps `completed_at` with the supplied timestamp or
/// NOW(); every other target status clears it. `updated_at` is refreshed on
/// every transition. Concurrent transitions resolve last-write-wins.
pub async fn update_status(
    db: &DatabaseConnection,
    id: i32,
    status: IncidentStatus,
    completed_at: Option<DateTime<Utc>>,
) -> AppResult<incident::Model> {
    let row = incident::Model::find_by_statement(Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        r#"
        UPDATE incidents
        SET status = $1,
            completed_at = CASE
                WHEN $1 = 'selesai' THEN COALESCE($2, NOW())
                ELSE NULL
            END,
            updated_at = NOW()
        WHERE id = $3
        RETURNING *
        "#,
        [status.as_str().into(), completed_at.into(), id.into()],
    ))
    .one(db)
    .await
    .map_err(|e| AppError::Database(format!("Failed to update incident status: {}", e)))?;

    row.ok_or_else(|| AppError::NotFound(format!("Incident {}", id)))
}

/// Incident counters for the dashboard, computed with conditional
/// aggregation in one query so every count reflects the same snapshot.
pub async fn stats(db: &DatabaseConnection) -> AppResult<SafetyStats> {
    #[derive(Debug, FromQueryResult)]
    struct StatsRow {
        total_this_month: i64,
        selesai: i64,
        investigasi: i64,
        pending: i64,
    }

    let row = StatsRow::find_by_statement(Statement::from_string(
        DatabaseBackend::Postgres,
        "SELECT \
            COUNT(*) FILTER ( \
                WHERE DATE_TRUNC('month', reported_at) = DATE_TRUNC('month', CURRENT_DATE) \
            ) AS total_this_month, \
            COUNT(*) FILTER (WHERE status = 'selesai') AS selesai, \
            COUNT(*) FILTER (WHERE status = 'investigasi') AS investigasi, \
            COUNT(*) FILTER (WHERE status = 'pending') AS pending \
         FROM incidents",
    ))
    .one(db)
    .await
    .map_err(|e| AppError::Database(format!("Failed to load safety stats: {}", e)))?
    .ok_or_else(|| AppError::Database("Safety stats query returned no row".to_string()))?;

    Ok(SafetyStats {
        total_this_month: row.total_this_month,
        selesai: row.selesai,
        investigasi: row.investigasi,
        pending: row.pending,
    })
}
