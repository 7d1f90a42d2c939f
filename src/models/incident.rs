//! Safety incident models.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::incident;

/// Incident severity scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Parse a severity from its wire value.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    /// Get severity as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// Incident resolution lifecycle.
///
/// Any state may transition to any other; ordering is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    Pending,
    Investigasi,
    Selesai,
}

impl IncidentStatus {
    /// Parse a status from its wire value.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "investigasi" => Some(Self::Investigasi),
            "selesai" => Some(Self::Selesai),
            _ => None,
        }
    }

    /// Get status as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Investigasi => "investigasi",
            Self::Selesai => "selesai",
        }
    }
}

/// Incident row as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Incident {
    pub id: i32,
    pub title: String,
    pub incident_type: Option<String>,
    pub severity: String,
    pub status: String,
    pub location: Option<String>,
    pub incident_date: Option<NaiveDate>,
    pub incident_time: Option<NaiveTime>,
    pub description: Option<String>,
    pub reporter_name: Option<String>,
    pub witnesses: Option<String>,
    pub immediate_action: Option<String>,
    pub reported_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

impl From<incident::Model> for Incident {
    fn from(m: incident::Model) -> Self {
        Incident {
            id: m.id,
            title: m.title,
            incident_type: m.incident_type,
            severity: m.severity,
            status: m.status,
            location: m.location,
            incident_date: m.incident_date,
            incident_time: m.incident_time,
            description: m.description,
            reporter_name: m.reporter_name,
            witnesses: m.witnesses,
            immediate_action: m.immediate_action,
            reported_at: m.reported_at,
            completed_at: m.completed_at,
            updated_at: m.updated_at,
        }
    }
}

/// Body for `POST /safety/reports`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateIncidentRequest {
    pub title: String,
    pub incident_type: Option<String>,
    pub severity: String,
    pub status: Option<String>,
    pub location: Option<String>,
    pub incident_date: Option<NaiveDate>,
    /// Clock time of the incident, `HH:MM` or `HH:MM:SS`.
    pub incident_time: Option<String>,
    pub description: Option<String>,
    pub reporter_name: Option<String>,
    pub witnesses: Option<String>,
    pub immediate_action: Option<String>,
}

/// Body for `PUT /safety/reports/{id}/status`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateIncidentStatusRequest {
    pub status: String,
    /// Completion timestamp; only honored when status is `selesai`.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Response for `GET /safety/reports/stats`.
///
/// All four counts come from one query so they describe the same snapshot.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SafetyStats {
    pub total_this_month: i64,
    pub selesai: i64,
    pub investigasi: i64,
    pub pending: i64,
}

/// Parse an incident clock time, accepting `HH:MM` and `HH:MM:SS`.
pub fn parse_incident_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parsing() {
        assert_eq!(Severity::parse("low"), Some(Severity::Low));
        assert_eq!(Severity::parse("medium"), Some(Severity::Medium));
        assert_eq!(Severity::parse("high"), Some(Severity::High));
        assert_eq!(Severity::parse("critical"), Some(Severity::Critical));
        assert_eq!(Severity::parse("CRITICAL"), None);
        assert_eq!(Severity::parse("catastrophic"), None);
        assert_eq!(Severity::parse(""), None);
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(IncidentStatus::parse("pending"), Some(IncidentStatus::Pending));
        assert_eq!(
            IncidentStatus::parse("investigasi"),
            Some(IncidentStatus::Investigasi)
        );
        assert_eq!(IncidentStatus::parse("selesai"), Some(IncidentStatus::Selesai));
        assert_eq!(IncidentStatus::parse("done"), None);
        assert_eq!(IncidentStatus::parse(""), None);
    }

    #[test]
    fn test_status_round_trip() {
        for s in ["pending", "investigasi", "selesai"] {
            assert_eq!(IncidentStatus::parse(s).map(|v| v.as_str()), Some(s));
        }
    }

    #[test]
    fn test_parse_incident_time() {
        assert_eq!(
            parse_incident_time("14:30"),
            NaiveTime::from_hms_opt(14, 30, 0)
        );
        assert_eq!(
            parse_incident_time("14:30:45"),
            NaiveTime::from_hms_opt(14, 30, 45)
        );
        assert_eq!(parse_incident_time("half past two"), None);
    }
}
