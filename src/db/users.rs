//! Database operations for dashboard users.

use sea_orm::*;

use crate::entity::user::{self, Entity as User};
use crate::error::{AppError, AppResult};

/// Find a user by username.
pub async fn find_by_username(
    db: &DatabaseConnection,
    username: &str,
) -> AppResult<Option<user::Model>> {
    let row = User::find_by_id(username.to_string())
        .one(db)
        .await
        .map_err(|e| AppError::Database(format!("Failed to look up user: {}", e)))?;

    Ok(row)
}
