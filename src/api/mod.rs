//! API endpoint modules.

pub mod activity;
pub mod attendance;
pub mod auth;
pub mod employees;
pub mod health;
pub mod openapi;
pub mod safety;
pub mod system;
pub mod trainings;

pub use activity::configure_routes as configure_activity_routes;
pub use attendance::configure_routes as configure_attendance_routes;
pub use auth::configure_routes as configure_auth_routes;
pub use employees::configure_routes as configure_employee_routes;
pub use health::configure_routes as configure_health_routes;
pub use openapi::ApiDoc;
pub use safety::configure_routes as configure_safety_routes;
pub use system::configure_routes as configure_system_routes;
pub use trainings::configure_routes as configure_training_routes;
