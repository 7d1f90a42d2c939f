//! Training attendance models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::training_attendance;

/// Attendance row as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AttendanceRecord {
    pub id: i32,
    pub training_id: i32,
    pub participant_name: String,
    pub timestamp: DateTime<Utc>,
    pub notes: Option<String>,
    pub signature_data: String,
}

impl From<training_attendance::Model> for AttendanceRecord {
    fn from(m: training_attendance::Model) -> Self {
        AttendanceRecord {
            id: m.id,
            training_id: m.training_id,
            participant_name: m.participant_name,
            timestamp: m.timestamp,
            notes: m.notes,
            signature_data: m.signature_data,
        }
    }
}

/// Body for `POST /training-attendance`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SubmitAttendanceRequest {
    pub training_id: i32,
    pub participant_name: String,
    pub notes: Option<String>,
    /// Base64 image payload captured from the signature canvas.
    pub signature: String,
}

/// Query parameters for `GET /training-attendance`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AttendanceQuery {
    pub participant: Option<String>,
}

/// Attendance row joined with its training, for history views.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AttendanceWithTraining {
    pub id: i32,
    pub training_id: i32,
    pub participant_name: String,
    pub attendance_date: DateTime<Utc>,
    pub training_title: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
}

/// Per-training headcount for `GET /attendance/list`.
///
/// `total_participants` counts distinct names; repeat sign-ins never
/// inflate it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TrainingAttendanceSummary {
    pub id: i32,
    pub title: String,
    pub total_participants: i32,
}

/// One sign-in for `GET /attendance/{trainingId}/participants`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TrainingParticipant {
    pub participant_name: String,
    pub timestamp: DateTime<Utc>,
    pub notes: Option<String>,
}

/// Response for `GET /attendance/stats`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AttendanceStats {
    /// Distinct participants with a sign-in today.
    pub hadir_hari_ini: i64,
    /// Mean fractional check-in hour (hour + minute/60) across today's rows.
    pub rata_jam_masuk: f64,
    /// Distinct active days this week as a percentage of 5 working days.
    pub kehadiran_minggu_ini: f64,
    /// Distinct calendar dates with activity this month.
    pub hari_kerja_bulan_ini: i64,
}
