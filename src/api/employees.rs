//! Employee registry endpoints.

use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::Utc;

use crate::db::{self, DbPool};
use crate::error::{AppError, AppResult};
use crate::models::{
    CreateEmployeeRequest, DeleteEmployeeResponse, Employee, UpdateEmployeeRequest,
};

/// Configure employee routes.
/// Note: More specific routes must be registered before generic ones.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(stats)
        .service(training_history)
        .service(list_employees)
        .service(create_employee)
        .service(update_employee)
        .service(delete_employee);
}

/// List all employees.
///
/// GET /employees
///
/// The dashboard filters and paginates client-side, so this returns the
/// whole (capped) table.
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "Employees",
    responses(
        (status = 200, description = "All employees, oldest first", body = [Employee])
    )
)]
#[get("/employees")]
pub async fn list_employees(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let rows = db::employees::list(pool.connection()).await?;
    let employees: Vec<Employee> = rows.into_iter().map(Employee::from).collect();

    Ok(HttpResponse::Ok().json(employees))
}

/// Register a new employee.
///
/// POST /employees
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "Employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Missing name or department", body = crate::error::ErrorResponse)
    )
)]
#[post("/employees")]
pub async fn create_employee(
    pool: web::Data<DbPool>,
    body: web::Json<CreateEmployeeRequest>,
) -> AppResult<HttpResponse> {
    if body.name.trim().is_empty() || body.department.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "name and department are required".to_string(),
        ));
    }

    let created = db::employees::insert(pool.connection(), &body.name, &body.department).await?;

    Ok(HttpResponse::Created().json(Employee::from(created)))
}

/// Update an employee's name and department.
///
/// PUT /employees/{id}
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(
        ("id" = i32, Path, description = "Employee id")
    ),
    request_body = UpdateEmployeeRequest,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Missing name or division", body = crate::error::ErrorResponse),
        (status = 404, description = "Employee not found", body = crate::error::ErrorResponse)
    )
)]
#[put("/employees/{id}")]
pub async fn update_employee(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<UpdateEmployeeRequest>,
) -> AppResult<HttpResponse> {
    if body.name.trim().is_empty() || body.department.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Name and division are required".to_string(),
        ));
    }

    let id = path.into_inner();
    let updated =
        db::employees::update(pool.connection(), id, &body.name, &body.department).await?;

    Ok(HttpResponse::Ok().json(Employee::from(updated)))
}

/// Delete an employee.
///
/// DELETE /employees/{id}
///
/// Hard delete. Historical attendance and health rows keep the employee's
/// name as plain text and are not touched.
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(
        ("id" = i32, Path, description = "Employee id")
    ),
    responses(
        (status = 200, description = "Employee deleted", body = DeleteEmployeeResponse),
        (status = 404, description = "Employee not found", body = crate::error::ErrorResponse)
    )
)]
#[delete("/employees/{id}")]
pub async fn delete_employee(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let deleted = db::employees::delete(pool.connection(), id).await?;

    Ok(HttpResponse::Ok().json(DeleteEmployeeResponse {
        message: "Employee deleted successfully".to_string(),
        deleted: Employee::from(deleted),
    }))
}

/// Active-employee headcount per department.
///
/// GET /employees/stats
#[utoipa::path(
    get,
    path = "/api/employees/stats",
    tag = "Employees",
    responses(
        (status = 200, description = "Department breakdown", body = crate::models::EmployeeStats)
    )
)]
#[get("/employees/stats")]
pub async fn stats(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let stats = db::employees::stats(pool.connection()).await?;

    Ok(HttpResponse::Ok().json(stats))
}

/// Full training history for an employee name, attended or not.
///
/// GET /employees/{name}/training-history
#[utoipa::path(
    get,
    path = "/api/employees/{name}/training-history",
    tag = "Employees",
    params(
        ("name" = String, Path, description = "Employee name (matched by string equality)")
    ),
    responses(
        (status = 200, description = "One row per training with derived status", body = [crate::models::TrainingHistoryEntry])
    )
)]
#[get("/employees/{name}/training-history")]
pub async fn training_history(
    pool: web::Data<DbPool>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let name = path.into_inner();
    let history = db::employees::training_history(pool.connection(), &name, Utc::now()).await?;

    Ok(HttpResponse::Ok().json(history))
}
