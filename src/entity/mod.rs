//! SeaORM entity definitions for PostgreSQL database.

pub mod employee;
pub mod health_check;
pub mod incident;
pub mod training;
pub mod training_attendance;
pub mod user;
