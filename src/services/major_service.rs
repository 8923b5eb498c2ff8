use sqlx::PgPool;
use tracing::info;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{Major, MajorName};

const DUPLICATE_MAJOR: &str = "Major already exists in the selected faculty";
const MAJOR_NOT_FOUND: &str = "Major not found for the specified university, faculty, and major";

/// Resolves a faculty id from (faculty name, university name) as `$2`, `$3`
const FACULTY_BY_NAMES: &str = r#"
    SELECT f.id
    FROM faculties f
    JOIN universities u ON f.university_id = u.id
    WHERE f.name = $2 AND u.name = $3
"#;

pub struct MajorService {
    pool: PgPool,
}

impl MajorService {
    pub async fn new() -> Result<Self, DatabaseError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    pub async fn create(
        &self,
        name: &str,
        university_name: &str,
        faculty_name: &str,
    ) -> Result<Major, DatabaseError> {
        let faculty: Option<(i32,)> = sqlx::query_as(
            r#"
            SELECT f.id
            FROM faculties f
            JOIN universities u ON f.university_id = u.id
            WHERE f.name = $1 AND u.name = $2
            "#,
        )
        .bind(faculty_name)
        .bind(university_name)
        .fetch_optional(&self.pool)
        .await?;

        let (faculty_id,) = faculty.ok_or_else(|| {
            DatabaseError::NotFound("Faculty not found in the specified university".to_string())
        })?;

        let major = sqlx::query_as::<_, Major>(
            "INSERT INTO majors (name, faculty_id) VALUES ($1, $2) \
             RETURNING id, name, faculty_id, created_at",
        )
        .bind(name)
        .bind(faculty_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::on_write(e, DUPLICATE_MAJOR))?;

        info!("Created major {} ({}) in faculty {}", major.id, major.name, faculty_id);
        Ok(major)
    }

    /// Major names of one faculty, alphabetical
    pub async fn list_names(
        &self,
        university_name: &str,
        faculty_name: &str,
    ) -> Result<Vec<MajorName>, DatabaseError> {
        let majors = sqlx::query_as::<_, MajorName>(
            r#"
            SELECT m.name AS major_name
            FROM majors m
            JOIN faculties f ON m.faculty_id = f.id
            JOIN universities u ON f.university_id = u.id
            WHERE u.name = $1 AND f.name = $2
            ORDER BY m.name
            "#,
        )
        .bind(university_name)
        .bind(faculty_name)
        .fetch_all(&self.pool)
        .await?;
        Ok(majors)
    }

    pub async fn rename(
        &self,
        university_name: &str,
        faculty_name: &str,
        major_name: &str,
        new_name: &str,
    ) -> Result<Major, DatabaseError> {
        let sql = format!(
            "UPDATE majors SET name = $4 WHERE name = $1 AND faculty_id = ({FACULTY_BY_NAMES}) \
             RETURNING id, name, faculty_id, created_at"
        );
        let major = sqlx::query_as::<_, Major>(&sql)
            .bind(major_name)
            .bind(faculty_name)
            .bind(university_name)
            .bind(new_name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DatabaseError::on_write(e, DUPLICATE_MAJOR))?
            .ok_or_else(|| DatabaseError::NotFound(MAJOR_NOT_FOUND.to_string()))?;

        info!("Renamed major {} from {} to {}", major.id, major_name, major.name);
        Ok(major)
    }

    pub async fn delete(
        &self,
        university_name: &str,
        faculty_name: &str,
        major_name: &str,
    ) -> Result<Major, DatabaseError> {
        let sql = format!(
            "DELETE FROM majors WHERE name = $1 AND faculty_id = ({FACULTY_BY_NAMES}) \
             RETURNING id, name, faculty_id, created_at"
        );
        let major = sqlx::query_as::<_, Major>(&sql)
            .bind(major_name)
            .bind(faculty_name)
            .bind(university_name)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(MAJOR_NOT_FOUND.to_string()))?;

        info!("Deleted major {} ({})", major.id, major.name);
        Ok(major)
    }
}
