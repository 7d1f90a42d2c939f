//! Training session models.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::entity::training;

/// Training session as returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Training {
    pub id: i32,
    pub title: String,
    pub trainer: String,
    pub start_time: DateTime<Utc>,
    pub duration_hours: f64,
    pub documentation_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<training::Model> for Training {
    fn from(m: training::Model) -> Self {
        Training {
            id: m.id,
            title: m.title,
            trainer: m.trainer,
            start_time: m.start_time,
            duration_hours: m.duration_hours,
            documentation_url: m.documentation_url,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
