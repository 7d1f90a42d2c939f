//! Training catalog read endpoints.
//!
//! Creation and documentation upload are multipart and live in
//! `services::upload`.

use actix_web::{HttpResponse, get, web};

use crate::db::{self, DbPool};
use crate::error::AppResult;
use crate::models::Training;

/// Configure training routes.
/// Note: More specific routes must be registered before generic ones.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(upcoming).service(list_trainings);
}

/// The 100 most recently scheduled trainings.
///
/// GET /trainings
#[utoipa::path(
    get,
    path = "/api/trainings",
    tag = "Trainings",
    responses(
        (status = 200, description = "Trainings, newest first", body = [Training])
    )
)]
#[get("/trainings")]
pub async fn list_trainings(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let rows = db::trainings::list(pool.connection()).await?;
    let trainings: Vec<Training> = rows.into_iter().map(Training::from).collect();

    Ok(HttpResponse::Ok().json(trainings))
}

/// Trainings starting today or later.
///
/// GET /trainings/upcoming
#[utoipa::path(
    get,
    path = "/api/trainings/upcoming",
    tag = "Trainings",
    responses(
        (status = 200, description = "Upcoming trainings, soonest first", body = [Training])
    )
)]
#[get("/trainings/upcoming")]
pub async fn upcoming(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let rows = db::trainings::upcoming(pool.connection()).await?;
    let trainings: Vec<Training> = rows.into_iter().map(Training::from).collect();

    Ok(HttpResponse::Ok().json(trainings))
}
