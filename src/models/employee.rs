//! Employee models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::employee;

/// Employee record as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub department: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<employee::Model> for Employee {
    fn from(m: employee::Model) -> Self {
        Employee {
            id: m.id,
            name: m.name,
            department: m.department,
            status: m.status,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Body for `POST /employees`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub department: String,
}

/// Body for `PUT /employees/{id}`.
///
/// The dashboard's edit form historically submits the department under the
/// key `division`; both spellings are accepted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateEmployeeRequest {
    pub name: String,
    #[serde(alias = "division")]
    pub department: String,
}

/// Response for `DELETE /employees/{id}`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteEmployeeResponse {
    pub message: String,
    pub deleted: Employee,
}

/// One department bucket in the employee stats breakdown.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DepartmentCount {
    pub department: String,
    pub count: i64,
}

/// Response for `GET /employees/stats`.
///
/// `total` is the sum of the per-department counts, not an independent
/// COUNT(*) — both numbers always describe the same snapshot.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EmployeeStats {
    pub total: i64,
    pub stats: Vec<DepartmentCount>,
}

/// One training in an employee's history, with a derived status.
///
/// `status` is one of `attended`, `upcoming`, `absent` and is recomputed on
/// every request relative to a single reference time.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TrainingHistoryEntry {
    pub training_title: String,
    pub start_time: DateTime<Utc>,
    pub attendance_date: Option<DateTime<Utc>>,
    pub status: String,
}
