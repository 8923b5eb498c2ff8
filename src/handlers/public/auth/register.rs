// handlers/public/auth/register.rs - POST /api/auth/register handler

use serde::Deserialize;

use crate::auth;
use crate::database::models::User;
use crate::error::ApiError;
use crate::handlers::utils::{required, required_secret};
use crate::middleware::{ApiJson, ApiResponse, ApiResult};
use crate::services::{NewUser, UserService};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// Optional enrolment, counted in the university and faculty listings
    pub university_id: Option<i32>,
    pub faculty_id: Option<i32>,
}

/**
 * POST /api/auth/register - Register new user account
 *
 * Expected Input:
 * ```json
 * {
 *   "name": "string",          // Required
 *   "email": "string",         // Required, unique
 *   "password": "string",      // Required, stored as a bcrypt hash
 *   "university_id": 1,        // Optional
 *   "faculty_id": 3            // Optional, must belong to university_id
 * }
 * ```
 *
 * Responds 201 with the created user (without the password hash),
 * 400 when a required field is missing or the faculty is unknown or
 * belongs to another university, and 409 when the email is taken.
 */
pub async fn register_post(ApiJson(payload): ApiJson<RegisterRequest>) -> ApiResult<User> {
    let (Some(name), Some(email), Some(password)) = (
        required(&payload.name),
        required(&payload.email),
        required_secret(&payload.password),
    ) else {
        return Err(ApiError::bad_request("All fields are required"));
    };

    let users = UserService::new().await?;

    if users.find_by_email(email).await?.is_some() {
        return Err(ApiError::conflict("Email already in use"));
    }

    let (university_id, faculty_id) = users
        .resolve_enrolment(payload.university_id, payload.faculty_id)
        .await?;

    let password_hash = auth::hash_password(password.to_string()).await?;

    let user = users
        .create(NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            university_id,
            faculty_id,
        })
        .await?;

    Ok(ApiResponse::created("User registered successfully", user))
}
