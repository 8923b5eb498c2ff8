use axum::extract::Path;
use serde::Deserialize;

use crate::api::hierarchy::UniversityNode;
use crate::database::models::University;
use crate::error::ApiError;
use crate::handlers::utils::{parse_id, required};
use crate::middleware::{ApiJson, ApiResponse, ApiResult};
use crate::services::UniversityService;

#[derive(Debug, Deserialize)]
pub struct UniversityRequest {
    pub name: Option<String>,
}

impl UniversityRequest {
    fn name(&self) -> Result<&str, ApiError> {
        required(&self.name).ok_or_else(|| ApiError::bad_request("University name is required"))
    }
}

/**
 * GET /api/auth/universities - Universities with nested faculties and majors
 *
 * ```json
 * [{ "university_id": 1, "university_name": "A State", "user_count": 5,
 *    "faculties": [{ "faculty_id": 10, "faculty_name": "Eng", "majors": ["CS", "EE"] }] }]
 * ```
 */
pub async fn list() -> ApiResult<Vec<UniversityNode>> {
    let universities = UniversityService::new().await?.list_tree().await?;
    Ok(ApiResponse::success(
        "Universities retrieved successfully",
        universities,
    ))
}

/// POST /api/auth/universities
pub async fn create(ApiJson(payload): ApiJson<UniversityRequest>) -> ApiResult<University> {
    let name = payload.name()?;
    let university = UniversityService::new().await?.create(name).await?;
    Ok(ApiResponse::created(
        "University created successfully",
        university,
    ))
}

/// PUT /api/auth/universities/:id
pub async fn update(
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UniversityRequest>,
) -> ApiResult<University> {
    let id = parse_id(&id, "university")?;
    let name = payload.name()?;
    let university = UniversityService::new().await?.rename(id, name).await?;
    Ok(ApiResponse::success(
        "University updated successfully",
        university,
    ))
}

/// DELETE /api/auth/universities/:id - Faculties and majors go with it
pub async fn delete(Path(id): Path<String>) -> ApiResult<University> {
    let id = parse_id(&id, "university")?;
    let university = UniversityService::new().await?.delete(id).await?;
    Ok(ApiResponse::success(
        "University deleted successfully",
        university,
    ))
}
