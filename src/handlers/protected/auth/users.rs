use axum::extract::Path;
use serde_json::Value;

use crate::database::models::User;
use crate::handlers::utils::parse_id;
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::UserService;

/// GET /api/auth/users - List all users (password hashes are never serialized)
pub async fn list() -> ApiResult<Vec<User>> {
    let users = UserService::new().await?.list().await?;
    Ok(ApiResponse::success("Users retrieved successfully", users))
}

/// DELETE /api/auth/users/:id
pub async fn delete(Path(id): Path<String>) -> ApiResult<Value> {
    let id = parse_id(&id, "user")?;
    UserService::new().await?.delete(id).await?;
    Ok(ApiResponse::message_only("User deleted successfully"))
}
