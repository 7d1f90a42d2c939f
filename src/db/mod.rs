//! Database module providing the shared connection pool and per-domain queries.

pub mod activity;
pub mod attendance;
pub mod employees;
pub mod health_checks;
pub mod incidents;
pub mod trainings;
pub mod users;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Shared database handle.
///
/// Every domain (employees, trainings, attendance, health, safety, activity)
/// runs its queries through this single bounded pool; there is deliberately
/// no pool-per-domain.
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
}

impl DbPool {
    /// Connect to PostgreSQL using the configured pool size.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let mut options = ConnectOptions::new(config.database_url());
        options.max_connections(config.max_db_connections);

        let conn = Database::connect(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to PostgreSQL: {}", e)))?;

        Ok(DbPool { conn })
    }

    /// Get access to the underlying connection for executing queries.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }
}
