use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct University {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// One row of the university × faculty × major join.
///
/// Faculty columns are null for a university without faculties and
/// `major_name` is null for a faculty without majors.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UniversityRow {
    pub university_id: i32,
    pub university_name: String,
    pub user_count: i64,
    pub faculty_id: Option<i32>,
    pub faculty_name: Option<String>,
    pub major_name: Option<String>,
}
