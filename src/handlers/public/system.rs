use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::database::DatabaseManager;
use crate::middleware::{ApiResponse, ApiResult};

/// GET / - Service name, version and route overview
pub async fn root() -> ApiResult<Value> {
    Ok(ApiResponse::success(
        "Campus API",
        json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "health": "/health (public)",
                "auth": "/api/auth/register, /api/auth/login (public)",
                "users": "/api/auth/users[/:id], /api/auth/change-password, /api/auth/logout (protected)",
                "universities": "/api/auth/universities[/:id] (protected)",
                "faculties": "/api/auth/faculties[/:university_name|:faculty_id] (protected)",
                "majors": "/api/auth/majors[/:university_name/:faculty_name[/:major_name]] (protected)",
            }
        }),
    ))
}

/// GET /health - 200 when the database answers, 503 otherwise
pub async fn health() -> impl IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": 200,
                "message": "ok",
                "data": {
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": 503,
                    "message": "database unavailable",
                    "data": {
                        "timestamp": now,
                        "database": "unavailable"
                    }
                })),
            )
        }
    }
}

/// GET /api/auth/test
pub async fn ping() -> ApiResult<Value> {
    Ok(ApiResponse::message_only("API is running"))
}
