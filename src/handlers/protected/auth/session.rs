use axum::Extension;
use serde::Deserialize;
use serde_json::Value;

use crate::auth::{self, RevokedTokens};
use crate::error::ApiError;
use crate::handlers::utils::required_secret;
use crate::middleware::{ApiJson, ApiResponse, ApiResult, AuthUser};
use crate::services::UserService;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(alias = "old_password")]
    pub old_password: Option<String>,
    #[serde(alias = "new_password")]
    pub new_password: Option<String>,
}

/// PUT /api/auth/change-password - Replace the caller's password
///
/// Expected Input:
/// ```json
/// { "oldPassword": "string", "newPassword": "string" }
/// ```
///
/// The old password must verify against the stored hash (400 otherwise);
/// a token whose user has been deleted gets 404.
pub async fn change_password(
    Extension(user): Extension<AuthUser>,
    ApiJson(payload): ApiJson<ChangePasswordRequest>,
) -> ApiResult<Value> {
    let (Some(old_password), Some(new_password)) = (
        required_secret(&payload.old_password),
        required_secret(&payload.new_password),
    ) else {
        return Err(ApiError::bad_request(
            "Old password and new password are required",
        ));
    };

    let users = UserService::new().await?;

    let stored = users
        .find_by_id(user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    if !auth::verify_password(old_password.to_string(), stored.password).await? {
        return Err(ApiError::bad_request("Old password is incorrect"));
    }

    let password_hash = auth::hash_password(new_password.to_string()).await?;
    users.update_password(user.id, &password_hash).await?;

    Ok(ApiResponse::message_only("Password changed successfully"))
}

/// POST /api/auth/logout - Revoke the presented token
///
/// The token stays on the revocation list until it would have expired anyway.
pub async fn logout(Extension(user): Extension<AuthUser>) -> ApiResult<Value> {
    RevokedTokens::global()
        .revoke(&user.token, user.expires_at)
        .await;
    tracing::info!("User {} logged out", user.id);

    Ok(ApiResponse::message_only("Logout successful"))
}
