//! Database operations for training sessions.

use chrono::{DateTime, Utc};
use sea_orm::*;

use crate::entity::training::{self, Entity as Training};
use crate::error::{AppError, AppResult};

/// List trainings newest-first, capped for the client-side table.
pub async fn list(db: &DatabaseConnection) -> AppResult<Vec<training::Model>> {
    let rows = Training::find()
        .order_by_desc(training::Column::StartTime)
        .limit(100)
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to list trainings: {}", e)))?;

    Ok(rows)
}

/// Trainings whose start date is today or later, soonest first.
pub async fn upcoming(db: &DatabaseConnection) -> AppResult<Vec<training::Model>> {
    let rows = training::Model::find_by_statement(Statement::from_string(
        DatabaseBackend::Postgres,
        "SELECT * FROM trainings \
         WHERE start_time >= CURRENT_DATE \
         ORDER BY start_time ASC",
    ))
    .all(db)
    .await
    .map_err(|e| AppError::Database(format!("Failed to list upcoming trainings: {}", e)))?;

    Ok(rows)
}

/// Find one training by id.
pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Option<training::Model>> {
    let row = Training::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to get training: {}", e)))?;

    Ok(row)
}

/// Insert a newly scheduled training.
pub async fn insert(
    db: &DatabaseConnection,
    title: &str,
    trainer: &str,
    start_time: DateTime<Utc>,
    duration_hours: f64,
    documentation_url: Option<String>,
) -> AppResult<training::Model> {
    let model = training::ActiveModel {
        title: Set(title.to_string()),
        trainer: Set(trainer.to_string()),
        start_time: Set(start_time),
        duration_hours: Set(duration_hours),
        documentation_url: Set(documentation_url),
        ..Default::default()
    };

    let created = model
        .insert(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert training: {}", e)))?;

    Ok(created)
}

/// Attach or replace the documentation image URL of a training.
pub async fn update_documentation(
    db: &DatabaseConnection,
    id: i32,
    documentation_url: &str,
) -> AppResult<training::Model> {
    let existing = Training::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Training {}", id)))?;

    let mut active: training::ActiveModel = existing.into();
    active.documentation_url = Set(Some(documentation_url.to_string()));
    active.updated_at = Set(Utc::now());

    let updated = active
        .update(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to update documentation: {}", e)))?;

    Ok(updated)
}
