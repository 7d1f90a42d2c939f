//! Unified activity feed models.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// One entry in the dashboard activity feed.
///
/// `id` is a synthetic composite of the source type and the source row id
/// (e.g. `"incident-42"`), unique across the merged feed.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ActivityEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub time: DateTime<Utc>,
}
