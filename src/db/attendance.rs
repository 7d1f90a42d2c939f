//! Database operations for the training attendance ledger, including the
//! attendance statistics used by the dashboard.

use chrono::{Datelike, Days, NaiveDate};
use sea_orm::*;

use crate::entity::training_attendance::{self, Entity as Attendance};
use crate::error::{AppError, AppResult};
use crate::models::{
    AttendanceStats, AttendanceWithTraining, TrainingAttendanceSummary, TrainingParticipant,
};

/// Working days per week used as the attendance-rate denominator.
///
/// Hardcoded to 5 regardless of public holidays; policy simplification
/// carried over from the system this backend replaces.
const WORKING_DAYS_PER_WEEK: f64 = 5.0;

/// Record a sign-in. Append-only; repeat sign-ins for the same training are
/// accepted and deduplicated at read time.
pub async fn insert(
    db: &DatabaseConnection,
    training_id: i32,
    participant_name: &str,
    notes: Option<String>,
    signature_data: &str,
) -> AppResult<training_attendance::Model> {
    let model = training_attendance::ActiveModel {
        training_id: Set(training_id),
        participant_name: Set(participant_name.to_string()),
        notes: Set(notes),
        signature_data: Set(signature_data.to_string()),
        ..Default::default()
    };

    let created = model
        .insert(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert attendance: {}", e)))?;

    Ok(created)
}

/// All sign-ins, oldest first.
pub async fn list_all(db: &DatabaseConnection) -> AppResult<Vec<training_attendance::Model>> {
    let rows = Attendance::find()
        .order_by_asc(training_attendance::Column::Timestamp)
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to list attendance: {}", e)))?;

    Ok(rows)
}

/// The 50 most recent sign-ins, newest first.
pub async fn recent(db: &DatabaseConnection) -> AppResult<Vec<training_attendance::Model>> {
    let rows = Attendance::find()
        .order_by_desc(training_attendance::Column::Timestamp)
        .limit(50)
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to list recent attendance: {}", e)))?;

    Ok(rows)
}

/// Sign-ins joined with their training, optionally filtered to one
/// participant name (string-equality match, not a key).
pub async fn with_training(
    db: &DatabaseConnection,
    participant: Option<&str>,
) -> AppResult<Vec<AttendanceWithTraining>> {
    #[derive(Debug, FromQueryResult)]
    struct JoinedRow {
        id: i32,
        training_id: i32,
        participant_name: String,
        attendance_date: chrono::DateTime<chrono::Utc>,
        training_title: Option<String>,
        start_time: Option<chrono::DateTime<chrono::Utc>>,
    }

    let base = "SELECT \
            ta.id, \
            ta.training_id, \
            ta.participant_name, \
            ta.timestamp AS attendance_date, \
            t.title AS training_title, \
            t.start_time \
         FROM training_attendance ta \
         LEFT JOIN trainings t ON ta.training_id = t.id";

    let stmt = match participant {
        Some(name) => Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!(
                "{} WHERE ta.participant_name = $1 ORDER BY ta.timestamp DESC",
                base
            ),
            [name.into()],
        ),
        None => Statement::from_string(
            DatabaseBackend::Postgres,
            format!("{} ORDER BY ta.timestamp DESC", base),
        ),
    };

    let rows: Vec<JoinedRow> = JoinedRow::find_by_statement(stmt)
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to list attendance history: {}", e)))?;

    Ok(rows
        .into_iter()
        .map(|r| AttendanceWithTraining {
            id: r.id,
            training_id: r.training_id,
            participant_name: r.participant_name,
            attendance_date: r.attendance_date,
            training_title: r.training_title,
            start_time: r.start_time,
        })
        .collect())
}

/// Per-training roster summary: distinct-participant headcount per training.
pub async fn summary(db: &DatabaseConnection) -> AppResult<Vec<TrainingAttendanceSummary>> {
    #[derive(Debug, FromQueryResult)]
    struct SummaryRow {
        id: i32,
        title: String,
        total_participants: i32,
    }

    // COUNT(DISTINCT ...) so repeat sign-ins never inflate the headcount
    let rows: Vec<SummaryRow> = SummaryRow::find_by_statement(Statement::from_string(
        DatabaseBackend::Postgres,
        "SELECT \
            t.id, \
            t.title, \
            COUNT(DISTINCT a.participant_name)::int AS total_participants \
         FROM trainings t \
         LEFT JOIN training_attendance a ON a.training_id = t.id \
         GROUP BY t.id, t.title, t.start_time \
         ORDER BY t.start_time DESC",
    ))
    .all(db)
    .await
    .map_err(|e| AppError::Database(format!("Failed to load attendance summary: {}", e)))?;

    Ok(rows
        .into_iter()
        .map(|r| TrainingAttendanceSummary {
            id: r.id,
            title: r.title,
            total_participants: r.total_participants,
        })
        .collect())
}

/// Sign-ins for one training, oldest first.
pub async fn participants(
    db: &DatabaseConnection,
    training_id: i32,
) -> AppResult<Vec<TrainingParticipant>> {
    let rows = Attendance::find()
        .filter(training_attendance::Column::TrainingId.eq(training_id))
        .order_by_asc(training_attendance::Column::Timestamp)
        .all(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to list participants: {}", e)))?;

    Ok(rows
        .into_iter()
        .map(|r| TrainingParticipant {
            participant_name: r.participant_name,
            timestamp: r.timestamp,
            notes: r.notes,
        })
        .collect())
}

/// Monday..Sunday of the ISO week containing `date`.
pub fn week_window(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = date - Days::new(date.weekday().num_days_from_monday() as u64);
    (monday, monday + Days::new(6))
}

/// First..last day of the calendar month containing `date`.
pub fn month_window(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date);

    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    let last = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|d| d - Days::new(1))
        .unwrap_or(date);

    (first, last)
}

/// Attendance statistics relative to one reference date (the server's
/// current calendar date). The four aggregates run as separate queries;
/// any failure fails the whole request.
pub async fn stats(db: &DatabaseConnection, reference: NaiveDate) -> AppResult<AttendanceStats> {
    #[derive(Debug, FromQueryResult)]
    struct CountRow {
        value: i64,
    }

    #[derive(Debug, FromQueryResult)]
    struct AvgRow {
        value: Option<f64>,
    }

    // Distinct names with a sign-in today; duplicates never double-count
    let hadir_hari_ini = CountRow::find_by_statement(Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        "SELECT COUNT(DISTINCT participant_name) AS value \
         FROM training_attendance \
         WHERE timestamp::date = $1",
        [reference.into()],
    ))
    .one(db)
    .await
    .map_err(|e| AppError::Database(format!("Failed to count today's attendance: {}", e)))?
    .map(|r| r.value)
    .unwrap_or(0);

    // Mean fractional check-in hour over today's rows, not a duration
    let rata_jam_masuk = AvgRow::find_by_statement(Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        "SELECT AVG(EXTRACT(HOUR FROM timestamp) + EXTRACT(MINUTE FROM timestamp) / 60.0)\
            ::double precision AS value \
         FROM training_attendance \
         WHERE timestamp::date = $1",
        [reference.into()],
    ))
    .one(db)
    .await
    .map_err(|e| AppError::Database(format!("Failed to average check-in hour: {}", e)))?
    .and_then(|r| r.value)
    .unwrap_or(0.0);

    let (week_start, week_end) = week_window(reference);
    let active_days_this_week = CountRow::find_by_statement(Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        "SELECT COUNT(DISTINCT timestamp::date) AS value \
         FROM training_attendance \
         WHERE timestamp::date BETWEEN $1 AND $2",
        [week_start.into(), week_end.into()],
    ))
    .one(db)
    .await
    .map_err(|e| AppError::Database(format!("Failed to count weekly attendance: {}", e)))?
    .map(|r| r.value)
    .unwrap_or(0);

    let (month_start, month_end) = month_window(reference);
    let hari_kerja_bulan_ini = CountRow::find_by_statement(Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        "SELECT COUNT(DISTINCT timestamp::date) AS value \
         FROM training_attendance \
         WHERE timestamp::date BETWEEN $1 AND $2",
        [month_start.into(), month_end.into()],
    ))
    .one(db)
    .await
    .map_err(|e| AppError::Database(format!("Failed to count monthly attendance: {}", e)))?
    .map(|r| r.value)
    .unwrap_or(0);

    Ok(AttendanceStats {
        hadir_hari_ini,
        rata_jam_masuk,
        kehadiran_minggu_ini: attendance_rate(active_days_this_week),
        hari_kerja_bulan_ini,
    })
}

/// Distinct active days expressed as a percentage of the working week.
fn attendance_rate(active_days: i64) -> f64 {
    (active_days as f64 / WORKING_DAYS_PER_WEEK) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_window_midweek() {
        // 2026-08-07 is a Friday
        let (start, end) = week_window(date(2026, 8, 7));
        assert_eq!(start, date(2026, 8, 3));
        assert_eq!(end, date(2026, 8, 9));
    }

    #[test]
    fn test_week_window_on_monday() {
        let (start, end) = week_window(date(2026, 8, 3));
        assert_eq!(start, date(2026, 8, 3));
        assert_eq!(end, date(2026, 8, 9));
    }

    #[test]
    fn test_week_window_on_sunday_stays_in_same_iso_week() {
        let (start, end) = week_window(date(2026, 8, 9));
        assert_eq!(start, date(2026, 8, 3));
        assert_eq!(end, date(2026, 8, 9));
    }

    #[test]
    fn test_week_window_spans_month_boundary() {
        // 2026-09-01 is a Tuesday; its week starts in August
        let (start, end) = week_window(date(2026, 9, 1));
        assert_eq!(start, date(2026, 8, 31));
        assert_eq!(end, date(2026, 9, 6));
    }

    #[test]
    fn test_month_window() {
        let (start, end) = month_window(date(2026, 8, 15));
        assert_eq!(start, date(2026, 8, 1));
        assert_eq!(end, date(2026, 8, 31));
    }

    #[test]
    fn test_month_window_december() {
        let (start, end) = month_window(date(2026, 12, 31));
        assert_eq!(start, date(2026, 12, 1));
        assert_eq!(end, date(2026, 12, 31));
    }

    #[test]
    fn test_month_window_leap_february() {
        let (start, end) = month_window(date(2024, 2, 10));
        assert_eq!(start, date(2024, 2, 1));
        assert_eq!(end, date(2024, 2, 29));
    }

    #[test]
    fn test_attendance_rate() {
        assert_eq!(attendance_rate(0), 0.0);
        assert_eq!(attendance_rate(3), 60.0);
        assert_eq!(attendance_rate(5), 100.0);
        // Six distinct days in a week still divides by the 5-day policy week
        assert_eq!(attendance_rate(6), 120.0);
    }
}
