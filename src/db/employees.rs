//! Database operations for employees.

use chrono::{DateTime, Utc};
use sea_orm::*;

use crate::entity::employee::{self, Entity as Employee};
use crate::error::{AppError, AppResult};
use crate::models::{DepartmentCount, EmployeeStats, TrainingHistoryEntry};

/// List employees oldest-first, capped for the client-side table.
pub async fn list(db: &DatabaseConnection) -> AppResult<Vec<employee::Model>> {
    let rows = Employee::find()
        .order_by_asc(employee::Column::CreatedAt)
        .limit(500)
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to list employees: {}", e)))?;

    Ok(rows)
}

/// Insert a new employee with status `active`.
pub async fn insert(
    db: &DatabaseConnection,
    name: &str,
    department: &str,
) -> AppResult<employee::Model> {
    let model = employee::ActiveModel {
        name: Set(name.to_string()),
        department: Set(department.to_string()),
        status: Set("active".to_string()),
        ..Default::default()
    };

    let created = model
        .insert(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert employee: {}", e)))?;

    Ok(created)
}

/// Update an employee's name and department.
pub async fn update(
    db: &DatabaseConnection,
    id: i32,
    name: &str,
    department: &str,
) -> AppResult<employee::Model> {
    let existing = Employee::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {}", id)))?;

    let mut active: employee::ActiveModel = existing.into();
    active.name = Set(name.to_string());
    active.department = Set(department.to_string());
    active.updated_at = Set(Utc::now());

    let updated = active
        .update(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to update employee: {}", e)))?;

    Ok(updated)
}

/// Hard-delete an employee, returning the removed row.
///
/// Historical attendance/health rows that carry this employee's name are
/// left untouched — they reference the name by value, not by key.
pub async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<employee::Model> {
    let existing = Employee::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {}", id)))?;

    Employee::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to delete employee: {}", e)))?;

    Ok(existing)
}

/// Active-employee headcount grouped by department.
pub async fn stats(db: &DatabaseConnection) -> AppResult<EmployeeStats> {
    #[derive(Debug, FromQueryResult)]
    struct DepartmentRow {
        department: String,
        count: i64,
    }

    let rows: Vec<DepartmentRow> = DepartmentRow::find_by_statement(Statement::from_string(
        DatabaseBackend::Postgres,
        "SELECT department, COUNT(*) AS count \
         FROM employees \
         WHERE status = 'active' \
         GROUP BY department",
    ))
    .all(db)
    .await
    .map_err(|e| AppError::Database(format!("Failed to load employee stats: {}", e)))?;

    // Grand total is the sum of the buckets, not a second COUNT(*), so both
    // numbers always describe the same snapshot.
    let total = rows.iter().map(|r| r.count).sum();

    Ok(EmployeeStats {
        total,
        stats: rows
            .into_iter()
            .map(|r| DepartmentCount {
                department: r.department,
                count: r.count,
            })
            .collect(),
    })
}

/// Full training history for one employee name: one row per training with a
/// derived attended/upcoming/absent status.
///
/// The classification is time-relative; `now` is evaluated once per request
/// and reused for every row so trainings near the boundary cannot flicker
/// between `upcoming` and `absent` within one response.
pub async fn training_history(
    db: &DatabaseConnection,
    employee_name: &str,
    now: DateTime<Utc>,
) -> AppResult<Vec<TrainingHistoryEntry>> {
    #[derive(Debug, FromQueryResult)]
    struct HistoryRow {
        training_title: String,
        start_time: DateTime<Utc>,
        attendance_date: Option<DateTime<Utc>>,
        status: String,
    }

    let rows: Vec<HistoryRow> = HistoryRow::find_by_statement(Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        r#"
        SELECT
            t.title AS training_title,
            t.start_time,
            ta.timestamp AS attendance_date,
            CASE
                WHEN ta.participant_name IS NOT NULL THEN 'attended'
                WHEN t.start_time > $2 THEN 'upcoming'
                ELSE 'absent'
            END AS status
        FROM trainings t
        LEFT JOIN training_attendance ta
            ON t.id = ta.training_id AND ta.participant_name = $1
        ORDER BY t.start_time DESC
        "#,
        [employee_name.into(), now.into()],
    ))
    .all(db)
    .await
    .map_err(|e| AppError::Database(format!("Failed to load training history: {}", e)))?;

    Ok(rows
        .into_iter()
        .map(|r| TrainingHistoryEntry {
            training_title: r.training_title,
            start_time: r.start_time,
            attendance_date: r.attendance_date,
            status: r.status,
        })
        .collect())
}
