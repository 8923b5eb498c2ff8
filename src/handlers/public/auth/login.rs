// handlers/public/auth/login.rs - POST /api/auth/login handler

use serde::{Deserialize, Serialize};

use crate::auth::{self, Claims};
use crate::error::ApiError;
use crate::handlers::utils::{required, required_secret};
use crate::middleware::{ApiJson, ApiResponse, ApiResult};
use crate::services::UserService;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Seconds until the token expires
    pub expires_in: i64,
}

/**
 * POST /api/auth/login - Authenticate user and receive a bearer token
 *
 * Expected Input:
 * ```json
 * { "email": "string", "password": "string" }
 * ```
 *
 * Expected Output (Success):
 * ```json
 * {
 *   "status": 200,
 *   "message": "Login successful",
 *   "data": { "token": "eyJhbGciOiJIUzI1NiI...", "expires_in": 3600 }
 * }
 * ```
 *
 * Unknown email and wrong password both answer 401 "Invalid credentials".
 */
pub async fn login_post(ApiJson(payload): ApiJson<LoginRequest>) -> ApiResult<LoginResponse> {
    let (Some(email), Some(password)) = (
        required(&payload.email),
        required_secret(&payload.password),
    ) else {
        return Err(ApiError::bad_request("Email and password are required"));
    };

    let users = UserService::new().await?;

    let Some(user) = users.find_by_email(email).await? else {
        tracing::warn!("Login failed: unknown email {}", email);
        return Err(ApiError::unauthorized("Invalid credentials"));
    };

    if !auth::verify_password(password.to_string(), user.password.clone()).await? {
        tracing::warn!("Login failed: wrong password for user {}", user.id);
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let claims = Claims::new(user.id);
    let token = auth::generate_jwt(&claims)?;
    tracing::info!("User {} logged in", user.id);

    Ok(ApiResponse::success(
        "Login successful",
        LoginResponse {
            token,
            expires_in: claims.expires_in(),
        },
    ))
}
