use axum::extract::Path;
use serde::Deserialize;
use serde_json::Value;

use crate::database::models::{Faculty, FacultySummary, UniversityFaculty};
use crate::error::ApiError;
use crate::handlers::utils::{parse_id, required};
use crate::middleware::{ApiJson, ApiResponse, ApiResult};
use crate::services::FacultyService;

/// Body shared by create and delete: a faculty addressed by its university
#[derive(Debug, Deserialize)]
pub struct FacultyRequest {
    pub faculty_name: Option<String>,
    pub university_name: Option<String>,
}

impl FacultyRequest {
    fn names(&self) -> Result<(&str, &str), ApiError> {
        match (required(&self.faculty_name), required(&self.university_name)) {
            (Some(faculty), Some(university)) => Ok((faculty, university)),
            _ => Err(ApiError::bad_request(
                "Faculty name and university name are required",
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RenameFacultyRequest {
    pub name: Option<String>,
}

/// GET /api/auth/faculties - Every faculty with its university and user count
pub async fn list() -> ApiResult<Vec<FacultySummary>> {
    let faculties = FacultyService::new().await?.list().await?;
    Ok(ApiResponse::success(
        "Faculties retrieved successfully",
        faculties,
    ))
}

/// POST /api/auth/faculties
pub async fn create(ApiJson(payload): ApiJson<FacultyRequest>) -> ApiResult<Faculty> {
    let (faculty_name, university_name) = payload.names()?;
    let faculty = FacultyService::new()
        .await?
        .create(faculty_name, university_name)
        .await?;
    Ok(ApiResponse::created("Faculty created successfully", faculty))
}

/// DELETE /api/auth/faculties - Faculty named in the body; its majors cascade
pub async fn delete(ApiJson(payload): ApiJson<FacultyRequest>) -> ApiResult<Value> {
    let (faculty_name, university_name) = payload.names()?;
    FacultyService::new()
        .await?
        .delete(faculty_name, university_name)
        .await?;
    Ok(ApiResponse::message_only("Faculty deleted successfully"))
}

/// GET /api/auth/faculties/:university_name
pub async fn list_by_university(
    Path(university_name): Path<String>,
) -> ApiResult<Vec<UniversityFaculty>> {
    let university_name = required(&Some(university_name))
        .map(str::to_string)
        .ok_or_else(|| ApiError::bad_request("University name is required"))?;

    let faculties = FacultyService::new()
        .await?
        .list_by_university(&university_name)
        .await?;
    Ok(ApiResponse::success(
        "Faculties retrieved successfully",
        faculties,
    ))
}

/// PUT /api/auth/faculties/:faculty_id
pub async fn update(
    Path(faculty_id): Path<String>,
    ApiJson(payload): ApiJson<RenameFacultyRequest>,
) -> ApiResult<Faculty> {
    let id = parse_id(&faculty_id, "faculty")?;
    let name = required(&payload.name)
        .ok_or_else(|| ApiError::bad_request("Faculty ID and new name are required"))?;

    let faculty = FacultyService::new().await?.rename(id, name).await?;
    Ok(ApiResponse::success("Faculty updated successfully", faculty))
}
