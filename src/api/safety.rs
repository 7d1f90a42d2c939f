//! Safety incident endpoints.

use actix_web::{HttpResponse, get, post, put, web};

use crate::db::{self, DbPool};
use crate::error::{AppError, AppResult};
use crate::models::incident::parse_incident_time;
use crate::models::{
    CreateIncidentRequest, Incident, IncidentStatus, Severity, UpdateIncidentStatusRequest,
};

/// Configure safety report routes.
/// Note: More specific routes must be registered before generic ones.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(stats)
        .service(list_reports)
        .service(create_report)
        .service(update_status);
}

/// The 100 most recent incident reports.
///
/// GET /safety/reports
#[utoipa::path(
    get,
    path = "/api/safety/reports",
    tag = "Safety",
    responses(
        (status = 200, description = "Latest incidents, newest first", body = [Incident])
    )
)]
#[get("/safety/reports")]
pub async fn list_reports(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let rows = db::incidents::list(pool.connection()).await?;
    let incidents: Vec<Incident> = rows.into_iter().map(Incident::from).collect();

    Ok(HttpResponse::Ok().json(incidents))
}

/// File a new incident report.
///
/// POST /safety/reports
///
/// Enum fields are validated before any write; an invalid severity or
/// status never inserts a row.
#[utoipa::path(
    post,
    path = "/api/safety/reports",
    tag = "Safety",
    request_body = CreateIncidentRequest,
    responses(
        (status = 201, description = "Incident recorded", body = Incident),
        (status = 400, description = "Missing title or invalid enum value", body = crate::error::ErrorResponse)
    )
)]
#[post("/safety/reports")]
pub async fn create_report(
    pool: web::Data<DbPool>,
    body: web::Json<CreateIncidentRequest>,
) -> AppResult<HttpResponse> {
    if body.title.trim().is_empty() {
        return Err(AppError::InvalidInput("title is required".to_string()));
    }

    let severity = Severity::parse(&body.severity).ok_or_else(|| {
        AppError::InvalidInput(format!(
            "severity '{}' must be one of low, medium, high, critical",
            body.severity
        ))
    })?;

    let status = match body.status.as_deref() {
        Some(raw) => IncidentStatus::parse(raw)
            .ok_or_else(|| AppError::InvalidInput("Status tidak valid".to_string()))?,
        None => IncidentStatus::Pending,
    };

    let incident_time = match body.incident_time.as_deref() {
        Some(raw) => Some(parse_incident_time(raw).ok_or_else(|| {
            AppError::InvalidInput(format!("incident_time '{}' is not a valid HH:MM time", raw))
        })?),
        None => None,
    };

    let created =
        db::incidents::insert(pool.connection(), &body, severity, status, incident_time).await?;

    Ok(HttpResponse::Created().json(Incident::from(created)))
}

/// Move an incident through its resolution lifecycle.
///
/// PUT /safety/reports/{id}/status
///
/// Entering `selesai` stamps the completion time; leaving it clears the
/// stamp. Any state may transition to any other.
#[utoipa::path(
    put,
    path = "/api/safety/reports/{id}/status",
    tag = "Safety",
    params(
        ("id" = i32, Path, description = "Incident id")
    ),
    request_body = UpdateIncidentStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = Incident),
        (status = 400, description = "Invalid status value", body = crate::error::ErrorResponse),
        (status = 404, description = "Incident not found", body = crate::error::ErrorResponse)
    )
)]
#[put("/safety/reports/{id}/status")]
pub async fn update_status(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<UpdateIncidentStatusRequest>,
) -> AppResult<HttpResponse> {
    let status = IncidentStatus::parse(&body.status)
        .ok_or_else(|| AppError::InvalidInput("Status tidak valid".to_string()))?;

    let id = path.into_inner();
    let updated =
        db::incidents::update_status(pool.connection(), id, status, body.completed_at).await?;

    Ok(HttpResponse::Ok().json(Incident::from(updated)))
}

/// Incident counters for the dashboard.
///
/// GET /safety/reports/stats
#[utoipa::path(
    get,
    path = "/api/safety/reports/stats",
    tag = "Safety",
    responses(
        (status = 200, description = "Monthly total and per-status counts", body = crate::models::SafetyStats)
    )
)]
#[get("/safety/reports/stats")]
pub async fn stats(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let stats = db::incidents::stats(pool.connection()).await?;

    Ok(HttpResponse::Ok().json(stats))
}
