//! Authentication models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Authenticated dashboard user.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthUser {
    pub username: String,
    pub role: String,
    pub name: String,
}

/// Response for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub user: AuthUser,
    pub token: String,
}

/// Response for `POST /auth/logout`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

/// Response for `GET /auth/check`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CheckResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthUser>,
}
