use axum::extract::Path;
use serde::Deserialize;

use crate::database::models::{Major, MajorName};
use crate::error::ApiError;
use crate::handlers::utils::required;
use crate::middleware::{ApiJson, ApiResponse, ApiResult};
use crate::services::MajorService;

#[derive(Debug, Deserialize)]
pub struct CreateMajorRequest {
    pub name: Option<String>,
    pub university_name: Option<String>,
    pub faculty_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RenameMajorRequest {
    pub name: Option<String>,
}

/// POST /api/auth/majors - Add a major to a faculty addressed by names
pub async fn create(ApiJson(payload): ApiJson<CreateMajorRequest>) -> ApiResult<Major> {
    let (Some(name), Some(university_name), Some(faculty_name)) = (
        required(&payload.name),
        required(&payload.university_name),
        required(&payload.faculty_name),
    ) else {
        return Err(ApiError::bad_request(
            "Name, university_name, and faculty_name are required",
        ));
    };

    let major = MajorService::new()
        .await?
        .create(name, university_name, faculty_name)
        .await?;
    Ok(ApiResponse::created("Major created successfully", major))
}

/// GET /api/auth/majors/:university_name/:faculty_name
///
/// An unknown university or faculty and a faculty without majors all answer 404.
pub async fn list(
    Path((university_name, faculty_name)): Path<(String, String)>,
) -> ApiResult<Vec<MajorName>> {
    let majors = MajorService::new()
        .await?
        .list_names(&university_name, &faculty_name)
        .await?;

    if majors.is_empty() {
        return Err(ApiError::not_found(
            "No majors found for the given university and faculty",
        ));
    }

    Ok(ApiResponse::success("Majors retrieved successfully", majors))
}

/// PUT /api/auth/majors/:university_name/:faculty_name/:major_name
pub async fn update(
    Path((university_name, faculty_name, major_name)): Path<(String, String, String)>,
    ApiJson(payload): ApiJson<RenameMajorRequest>,
) -> ApiResult<Major> {
    let new_name = required(&payload.name)
        .ok_or_else(|| ApiError::bad_request("New major name is required"))?;

    let major = MajorService::new()
        .await?
        .rename(&university_name, &faculty_name, &major_name, new_name)
        .await?;
    Ok(ApiResponse::success("Major updated successfully", major))
}

/// DELETE /api/auth/majors/:university_name/:faculty_name/:major_name
pub async fn delete(
    Path((university_name, faculty_name, major_name)): Path<(String, String, String)>,
) -> ApiResult<Major> {
    let major = MajorService::new()
        .await?
        .delete(&university_name, &faculty_name, &major_name)
        .await?;
    Ok(ApiResponse::success("Major deleted successfully", major))
}
