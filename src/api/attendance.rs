//! Training attendance endpoints.

use actix_web::{HttpResponse, get, post, web};
use chrono::Local;

use crate::db::{self, DbPool};
use crate::error::{AppError, AppResult};
use crate::models::{AttendanceQuery, AttendanceRecord, SubmitAttendanceRequest};

/// Configure attendance routes.
/// Note: More specific routes must be registered before generic ones.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(summary)
        .service(recent)
        .service(stats)
        .service(participants)
        .service(list_all)
        .service(submit)
        .service(with_training);
}

/// Record a training sign-in with its signature payload.
///
/// POST /training-attendance
#[utoipa::path(
    post,
    path = "/api/training-attendance",
    tag = "Attendance",
    request_body = SubmitAttendanceRequest,
    responses(
        (status = 201, description = "Sign-in recorded", body = AttendanceRecord),
        (status = 400, description = "Missing participant or signature", body = crate::error::ErrorResponse)
    )
)]
#[post("/training-attendance")]
pub async fn submit(
    pool: web::Data<DbPool>,
    body: web::Json<SubmitAttendanceRequest>,
) -> AppResult<HttpResponse> {
    if body.participant_name.trim().is_empty() || body.signature.is_empty() {
        return Err(AppError::InvalidInput(
            "training_id, participant_name, and signature are required".to_string(),
        ));
    }

    let created = db::attendance::insert(
        pool.connection(),
        body.training_id,
        &body.participant_name,
        body.notes.clone(),
        &body.signature,
    )
    .await?;

    Ok(HttpResponse::Created().json(AttendanceRecord::from(created)))
}

/// Sign-ins joined with training metadata, optionally for one participant.
///
/// GET /training-attendance?participant=Ana
#[utoipa::path(
    get,
    path = "/api/training-attendance",
    tag = "Attendance",
    params(
        ("participant" = Option<String>, Query, description = "Filter to one participant name")
    ),
    responses(
        (status = 200, description = "Sign-ins with training title and start time", body = [crate::models::AttendanceWithTraining])
    )
)]
#[get("/training-attendance")]
pub async fn with_training(
    pool: web::Data<DbPool>,
    query: web::Query<AttendanceQuery>,
) -> AppResult<HttpResponse> {
    let rows = db::attendance::with_training(pool.connection(), query.participant.as_deref()).await?;

    Ok(HttpResponse::Ok().json(rows))
}

/// All sign-ins, oldest first.
///
/// GET /attendance
#[utoipa::path(
    get,
    path = "/api/attendance",
    tag = "Attendance",
    responses(
        (status = 200, description = "Every sign-in", body = [AttendanceRecord])
    )
)]
#[get("/attendance")]
pub async fn list_all(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let rows = db::attendance::list_all(pool.connection()).await?;
    let records: Vec<AttendanceRecord> = rows.into_iter().map(AttendanceRecord::from).collect();

    Ok(HttpResponse::Ok().json(records))
}

/// The 50 most recent sign-ins.
///
/// GET /attendance/recent
#[utoipa::path(
    get,
    path = "/api/attendance/recent",
    tag = "Attendance",
    responses(
        (status = 200, description = "Latest sign-ins, newest first", body = [AttendanceRecord])
    )
)]
#[get("/attendance/recent")]
pub async fn recent(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let rows = db::attendance::recent(pool.connection()).await?;
    let records: Vec<AttendanceRecord> = rows.into_iter().map(AttendanceRecord::from).collect();

    Ok(HttpResponse::Ok().json(records))
}

/// Per-training distinct-participant headcounts.
///
/// GET /attendance/list
#[utoipa::path(
    get,
    path = "/api/attendance/list",
    tag = "Attendance",
    responses(
        (status = 200, description = "Trainings with unique participant totals", body = [crate::models::TrainingAttendanceSummary])
    )
)]
#[get("/attendance/list")]
pub async fn summary(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let rows = db::attendance::summary(pool.connection()).await?;

    Ok(HttpResponse::Ok().json(rows))
}

/// Attendance statistics for the dashboard cards.
///
/// GET /attendance/stats
#[utoipa::path(
    get,
    path = "/api/attendance/stats",
    tag = "Attendance",
    responses(
        (status = 200, description = "Today/week/month attendance aggregates", body = crate::models::AttendanceStats)
    )
)]
#[get("/attendance/stats")]
pub async fn stats(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    // One reference date for all four aggregates, on the server's calendar
    let reference = Local::now().date_naive();
    let stats = db::attendance::stats(pool.connection(), reference).await?;

    Ok(HttpResponse::Ok().json(stats))
}

/// Who signed in to one training.
///
/// GET /attendance/{trainingId}/participants
#[utoipa::path(
    get,
    path = "/api/attendance/{training_id}/participants",
    tag = "Attendance",
    params(
        ("training_id" = i32, Path, description = "Training id")
    ),
    responses(
        (status = 200, description = "Sign-ins for the training, oldest first", body = [crate::models::TrainingParticipant])
    )
)]
#[get("/attendance/{training_id}/participants")]
pub async fn participants(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let training_id = path.into_inner();
    let rows = db::attendance::participants(pool.connection(), training_id).await?;

    Ok(HttpResponse::Ok().json(rows))
}
