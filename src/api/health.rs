//! Health checkup endpoints.

use actix_web::{HttpResponse, get, post, web};

use crate::db::{self, DbPool};
use crate::error::{AppError, AppResult};
use crate::models::{HealthCheck, SubmitHealthCheckRequest};

/// Configure health checkup routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(stats).service(list_checks).service(create_check);
}

/// The 100 most recent checkups.
///
/// GET /health/checks
#[utoipa::path(
    get,
    path = "/api/health/checks",
    tag = "Health",
    responses(
        (status = 200, description = "Latest checkups, newest first", body = [HealthCheck])
    )
)]
#[get("/health/checks")]
pub async fn list_checks(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let rows = db::health_checks::list(pool.connection()).await?;
    let checks: Vec<HealthCheck> = rows.into_iter().map(HealthCheck::from).collect();

    Ok(HttpResponse::Ok().json(checks))
}

/// Record a checkup.
///
/// POST /health/checks
///
/// The signature is a client-side precondition only and is not enforced
/// here, unlike training attendance.
#[utoipa::path(
    post,
    path = "/api/health/checks",
    tag = "Health",
    request_body = SubmitHealthCheckRequest,
    responses(
        (status = 201, description = "Checkup recorded", body = HealthCheck),
        (status = 400, description = "Missing employee name", body = crate::error::ErrorResponse)
    )
)]
#[post("/health/checks")]
pub async fn create_check(
    pool: web::Data<DbPool>,
    body: web::Json<SubmitHealthCheckRequest>,
) -> AppResult<HttpResponse> {
    if body.employee_name.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "employee_name wajib diisi".to_string(),
        ));
    }

    let created = db::health_checks::insert(pool.connection(), &body).await?;

    Ok(HttpResponse::Created().json(HealthCheck::from(created)))
}

/// Vital averages over the whole history plus this month's checkup count.
///
/// GET /health/stats
#[utoipa::path(
    get,
    path = "/api/health/stats",
    tag = "Health",
    responses(
        (status = 200, description = "Rounded vital averages", body = crate::models::HealthStats)
    )
)]
#[get("/health/stats")]
pub async fn stats(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let stats = db::health_checks::stats(pool.connection()).await?;

    Ok(HttpResponse::Ok().json(stats))
}
