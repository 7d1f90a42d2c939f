//! Domain models for the K3 server.

pub mod activity;
pub mod attendance;
pub mod auth;
pub mod employee;
pub mod health;
pub mod incident;
pub mod training;

// Re-export commonly used types
pub use activity::ActivityEntry;
pub use attendance::{
    AttendanceQuery, AttendanceRecord, AttendanceStats, AttendanceWithTraining,
    SubmitAttendanceRequest, TrainingAttendanceSummary, TrainingParticipant,
};
pub use auth::{AuthUser, CheckResponse, LoginRequest, LoginResponse, LogoutResponse};
pub use employee::{
    CreateEmployeeRequest, DeleteEmployeeResponse, DepartmentCount, Employee, EmployeeStats,
    TrainingHistoryEntry, UpdateEmployeeRequest,
};
pub use health::{HealthCheck, HealthStats, SubmitHealthCheckRequest};
pub use incident::{
    CreateIncidentRequest, Incident, IncidentStatus, SafetyStats, Severity,
    UpdateIncidentStatusRequest,
};
pub use training::Training;
