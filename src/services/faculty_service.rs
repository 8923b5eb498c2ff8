use sqlx::PgPool;
use tracing::info;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{Faculty, FacultySummary, UniversityFaculty};

use super::university_service::UniversityService;

const DUPLICATE_FACULTY: &str = "Faculty already exists in the selected university";

pub struct FacultyService {
    pool: PgPool,
}

impl FacultyService {
    pub async fn new() -> Result<Self, DatabaseError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    fn universities(&self) -> UniversityService {
        UniversityService::from_pool(self.pool.clone())
    }

    /// Every faculty with its university and the number of users enrolled in it
    pub async fn list(&self) -> Result<Vec<FacultySummary>, DatabaseError> {
        let faculties = sqlx::query_as::<_, FacultySummary>(
            r#"
            SELECT
                f.id AS faculty_id,
                f.name AS faculty_name,
                u.id AS university_id,
                u.name AS university_name,
                COUNT(us.id) AS user_count
            FROM faculties f
            JOIN universities u ON f.university_id = u.id
            LEFT JOIN users us ON us.faculty_id = f.id
            GROUP BY f.id, f.name, u.id, u.name
            ORDER BY u.id, f.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(faculties)
    }

    pub async fn list_by_university(
        &self,
        university_name: &str,
    ) -> Result<Vec<UniversityFaculty>, DatabaseError> {
        let university_id = self.universities().id_by_name(university_name).await?;

        let faculties = sqlx::query_as::<_, UniversityFaculty>(
            r#"
            SELECT
                f.id AS faculty_id,
                f.name AS faculty_name,
                COUNT(us.id) AS user_count
            FROM faculties f
            LEFT JOIN users us ON us.faculty_id = f.id
            WHERE f.university_id = $1
            GROUP BY f.id, f.name
            ORDER BY f.name
            "#,
        )
        .bind(university_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(faculties)
    }

    pub async fn create(
        &self,
        faculty_name: &str,
        university_name: &str,
    ) -> Result<Faculty, DatabaseError> {
        let university_id = self.universities().id_by_name(university_name).await?;

        let faculty = sqlx::query_as::<_, Faculty>(
            "INSERT INTO faculties (name, university_id) VALUES ($1, $2) \
             RETURNING id, name, university_id, created_at",
        )
        .bind(faculty_name)
        .bind(university_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::on_write(e, DUPLICATE_FACULTY))?;

        info!(
            "Created faculty {} ({}) in university {}",
            faculty.id, faculty.name, university_name
        );
        Ok(faculty)
    }

    pub async fn delete(
        &self,
        faculty_name: &str,
        university_name: &str,
    ) -> Result<Faculty, DatabaseError> {
        let university_id = self.universities().id_by_name(university_name).await?;

        let faculty = sqlx::query_as::<_, Faculty>(
            "DELETE FROM faculties WHERE name = $1 AND university_id = $2 \
             RETURNING id, name, university_id, created_at",
        )
        .bind(faculty_name)
        .bind(university_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            DatabaseError::NotFound("Faculty not found in the specified university".to_string())
        })?;

        info!("Deleted faculty {} ({})", faculty.id, faculty.name);
        Ok(faculty)
    }

    pub async fn rename(&self, id: i32, name: &str) -> Result<Faculty, DatabaseError> {
        let faculty = sqlx::query_as::<_, Faculty>(
            "UPDATE faculties SET name = $1 WHERE id = $2 \
             RETURNING id, name, university_id, created_at",
        )
        .bind(name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::on_write(e, DUPLICATE_FACULTY))?
        .ok_or_else(|| DatabaseError::NotFound("Faculty not found".to_string()))?;

        info!("Renamed faculty {} to {}", faculty.id, faculty.name);
        Ok(faculty)
    }
}
