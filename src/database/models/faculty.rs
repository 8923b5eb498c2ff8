use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Faculty {
    pub id: i32,
    pub name: String,
    pub university_id: i32,
    pub created_at: DateTime<Utc>,
}

/// Faculty listing row with its university and enrolled user count
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FacultySummary {
    pub faculty_id: i32,
    pub faculty_name: String,
    pub university_id: i32,
    pub university_name: String,
    pub user_count: i64,
}

/// Faculty listing row scoped to a single university
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UniversityFaculty {
    pub faculty_id: i32,
    pub faculty_name: String,
    pub user_count: i64,
}
