//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models, services};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "K3 Server",
        version = "0.3.0",
        description = "REST backend for the K3 workplace safety and HR dashboard: employees, trainings, attendance with digital signatures, health checkups and incident reports"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // System endpoints
        api::system::health,
        api::system::ready,
        // Auth endpoints
        api::auth::login,
        api::auth::logout,
        api::auth::check,
        // Employee endpoints
        api::employees::list_employees,
        api::employees::create_employee,
        api::employees::update_employee,
        api::employees::delete_employee,
        api::employees::stats,
        api::employees::training_history,
        // Training endpoints
        api::trainings::list_trainings,
        api::trainings::upcoming,
        services::upload::create_training,
        services::upload::upload_documentation,
        // Attendance endpoints
        api::attendance::submit,
        api::attendance::with_training,
        api::attendance::list_all,
        api::attendance::recent,
        api::attendance::summary,
        api::attendance::stats,
        api::attendance::participants,
        // Health checkup endpoints
        api::health::list_checks,
        api::health::create_check,
        api::health::stats,
        // Safety endpoints
        api::safety::list_reports,
        api::safety::create_report,
        api::safety::update_status,
        api::safety::stats,
        // Activity feed
        api::activity::recent,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            // System
            api::system::HealthResponse,
            api::system::ReadyResponse,
            // Auth
            models::LoginRequest,
            models::LoginResponse,
            models::LogoutResponse,
            models::CheckResponse,
            models::AuthUser,
            // Employees
            models::Employee,
            models::CreateEmployeeRequest,
            models::UpdateEmployeeRequest,
            models::DeleteEmployeeResponse,
            models::DepartmentCount,
            models::EmployeeStats,
            models::TrainingHistoryEntry,
            // Trainings
            models::Training,
            // Attendance
            models::AttendanceRecord,
            models::SubmitAttendanceRequest,
            models::AttendanceWithTraining,
            models::TrainingAttendanceSummary,
            models::TrainingParticipant,
            models::AttendanceStats,
            // Health
            models::HealthCheck,
            models::SubmitHealthCheckRequest,
            models::HealthStats,
            // Safety
            models::Incident,
            models::CreateIncidentRequest,
            models::UpdateIncidentStatusRequest,
            models::SafetyStats,
            models::Severity,
            models::IncidentStatus,
            // Activity
            models::ActivityEntry,
        )
    ),
    tags(
        (name = "System", description = "Service health probes"),
        (name = "Auth", description = "Login and token validation"),
        (name = "Employees", description = "Employee registry"),
        (name = "Trainings", description = "Training catalog and documentation upload"),
        (name = "Attendance", description = "Training attendance ledger and statistics"),
        (name = "Health", description = "Health checkup log"),
        (name = "Safety", description = "Incident register"),
        (name = "Activity", description = "Unified activity feed")
    )
)]
pub struct ApiDoc;
