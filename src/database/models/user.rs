use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// bcrypt hash; never leaves the server
    #[serde(skip_serializing)]
    pub password: String,
    pub university_id: Option<i32>,
    pub faculty_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}
