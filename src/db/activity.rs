//! Unified activity feed: fan-out over the five domain tables, in-memory
//! merge-sort of the union.

use sea_orm::*;

use crate::entity::{employee, health_check, incident, training, training_attendance};
use crate::error::{AppError, AppResult};
use crate::models::ActivityEntry;

/// Rows fetched from each source table.
const PER_SOURCE: u64 = 10;

/// Entries returned to the dashboard after merging.
const PAGE_SIZE: usize = 20;

/// The 20 most recent events across attendance, employees, health checks,
/// incidents and trainings.
///
/// The five source queries run concurrently so feed latency is bounded by
/// the slowest single source. Each source is already sorted descending by
/// its own timestamp column; the merge therefore only has to re-sort the
/// 50-row union. There is no per-source fallback: one failed source fails
/// the whole feed.
pub async fn recent(db: &DatabaseConnection) -> AppResult<Vec<ActivityEntry>> {
    let attendance = training_attendance::Entity::find()
        .order_by_desc(training_attendance::Column::Timestamp)
        .limit(PER_SOURCE)
        .all(db);
    let employees = employee::Entity::find()
        .order_by_desc(employee::Column::CreatedAt)
        .limit(PER_SOURCE)
        .all(db);
    let health = health_check::Entity::find()
        .order_by_desc(health_check::Column::MeasuredAt)
        .limit(PER_SOURCE)
        .all(db);
    let incidents = incident::Entity::find()
        .order_by_desc(incident::Column::ReportedAt)
        .limit(PER_SOURCE)
        .all(db);
    let trainings = training::Entity::find()
        .order_by_desc(training::Column::StartTime)
        .limit(PER_SOURCE)
        .all(db);

    let (attendance, employees, health, incidents, trainings) =
        tokio::try_join!(attendance, employees, health, incidents, trainings)
            .map_err(|e| AppError::Database(format!("Failed to load activity feed: {}", e)))?;

    let mut entries: Vec<ActivityEntry> = Vec::with_capacity(5 * PER_SOURCE as usize);

    entries.extend(attendance.into_iter().map(|a| ActivityEntry {
        id: format!("attendance-{}", a.id),
        kind: "attendance".to_string(),
        message: format!("{} mengisi absensi pelatihan", a.participant_name),
        time: a.timestamp,
    }));

    entries.extend(employees.into_iter().map(|e| ActivityEntry {
        id: format!("employee-{}", e.id),
        kind: "employee".to_string(),
        message: format!("Karyawan baru ditambahkan - {}", e.name),
        time: e.created_at,
    }));

    entries.extend(health.into_iter().map(|h| ActivityEntry {
        id: format!("health-{}", h.id),
        kind: "health".to_string(),
        message: format!("Pemeriksaan kesehatan - {}", h.employee_name),
        time: h.measured_at,
    }));

    entries.extend(incidents.into_iter().map(|i| ActivityEntry {
        id: format!("incident-{}", i.id),
        kind: "incident".to_string(),
        message: format!("Laporan insiden - {}", i.title),
        time: i.reported_at,
    }));

    entries.extend(trainings.into_iter().map(|t| ActivityEntry {
        id: format!("training-{}", t.id),
        kind: "training".to_string(),
        message: format!("Pelatihan baru dijadwalkan: {}", t.title),
        time: t.start_time,
    }));

    Ok(merge(entries, PAGE_SIZE))
}

/// Sort the union newest-first and truncate to the page size.
fn merge(mut entries: Vec<ActivityEntry>, limit: usize) -> Vec<ActivityEntry> {
    entries.sort_by(|a, b| b.time.cmp(&a.time));
    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(kind: &str, id: i32, minute: u32) -> ActivityEntry {
        ActivityEntry {
            id: format!("{}-{}", kind, id),
            kind: kind.to_string(),
            message: format!("{} event", kind),
            time: Utc.with_ymd_and_hms(2026, 8, 7, 9, minute, 0).unwrap(),
        }
    }

    #[test]
    fn test_merge_sorts_union_descending() {
        let merged = merge(
            vec![
                entry("employee", 1, 5),
                entry("incident", 1, 30),
                entry("health", 1, 10),
            ],
            20,
        );

        assert_eq!(merged[0].id, "incident-1");
        assert_eq!(merged[1].id, "health-1");
        assert_eq!(merged[2].id, "employee-1");
    }

    #[test]
    fn test_merge_truncates_to_page_size() {
        let entries: Vec<ActivityEntry> = (0..50).map(|i| entry("attendance", i, i as u32)).collect();
        let merged = merge(entries, 20);

        assert_eq!(merged.len(), 20);
        // Newest entry survives truncation
        assert_eq!(merged[0].id, "attendance-49");
    }

    #[test]
    fn test_merge_of_presorted_sources_is_globally_descending() {
        // Two sources, each already descending, interleaved timestamps
        let mut entries = vec![
            entry("employee", 2, 40),
            entry("employee", 1, 20),
            entry("training", 2, 50),
            entry("training", 1, 30),
        ];
        entries = merge(entries, 20);

        let times: Vec<_> = entries.iter().map(|e| e.time).collect();
        let mut sorted = times.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(times, sorted);
    }

    #[test]
    fn test_merge_empty_sources() {
        assert!(merge(Vec::new(), 20).is_empty());
    }
}
