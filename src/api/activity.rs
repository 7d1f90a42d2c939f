//! Unified activity feed endpoint.

use actix_web::{HttpResponse, get, web};

use crate::db::{self, DbPool};
use crate::error::AppResult;
use crate::models::ActivityEntry;

/// Configure activity feed routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(recent);
}

/// The 20 most recent events across all domains.
///
/// GET /activity/recent
///
/// Polled by the dashboard every few seconds; always recomputed, never
/// cached.
#[utoipa::path(
    get,
    path = "/api/activity/recent",
    tag = "Activity",
    responses(
        (status = 200, description = "Merged activity feed, newest first", body = [ActivityEntry])
    )
)]
#[get("/activity/recent")]
pub async fn recent(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let entries = db::activity::recent(pool.connection()).await?;

    Ok(HttpResponse::Ok().json(entries))
}
