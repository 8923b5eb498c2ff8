use sqlx::PgPool;
use tracing::info;

use crate::api::hierarchy::{aggregate_universities, UniversityNode};
use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{University, UniversityRow};

/// One row per university × faculty × major. The user count is computed once
/// per university before the fan-out, so it repeats unchanged on every row.
const UNIVERSITY_TREE_SQL: &str = r#"
    SELECT
        u.id AS university_id,
        u.name AS university_name,
        COALESCE(uc.user_count, 0) AS user_count,
        f.id AS faculty_id,
        f.name AS faculty_name,
        m.name AS major_name
    FROM universities u
    LEFT JOIN (
        SELECT university_id, COUNT(*) AS user_count
        FROM users
        WHERE university_id IS NOT NULL
        GROUP BY university_id
    ) uc ON uc.university_id = u.id
    LEFT JOIN faculties f ON f.university_id = u.id
    LEFT JOIN majors m ON m.faculty_id = f.id
    ORDER BY u.id, f.id, m.name
"#;

pub struct UniversityService {
    pool: PgPool,
}

impl UniversityService {
    pub async fn new() -> Result<Self, DatabaseError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    pub(crate) fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All universities with their faculties and major names
    pub async fn list_tree(&self) -> Result<Vec<UniversityNode>, DatabaseError> {
        let rows = sqlx::query_as::<_, UniversityRow>(UNIVERSITY_TREE_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(aggregate_universities(rows))
    }

    pub async fn create(&self, name: &str) -> Result<University, DatabaseError> {
        let university = sqlx::query_as::<_, University>(
            "INSERT INTO universities (name) VALUES ($1) RETURNING id, name, created_at",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::on_write(e, "University already exists"))?;

        info!("Created university {} ({})", university.id, university.name);
        Ok(university)
    }

    pub async fn rename(&self, id: i32, name: &str) -> Result<University, DatabaseError> {
        let university = sqlx::query_as::<_, University>(
            "UPDATE universities SET name = $1 WHERE id = $2 RETURNING id, name, created_at",
        )
        .bind(name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DatabaseError::on_write(e, "University already exists"))?
        .ok_or_else(|| DatabaseError::NotFound("University not found".to_string()))?;

        info!("Renamed university {} to {}", university.id, university.name);
        Ok(university)
    }

    /// Delete a university; its faculties and majors cascade
    pub async fn delete(&self, id: i32) -> Result<University, DatabaseError> {
        let university = sqlx::query_as::<_, University>(
            "DELETE FROM universities WHERE id = $1 RETURNING id, name, created_at",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound("University not found".to_string()))?;

        info!("Deleted university {} ({})", university.id, university.name);
        Ok(university)
    }

    pub async fn id_by_name(&self, name: &str) -> Result<i32, DatabaseError> {
        let row: Option<(i32,)> = sqlx::query_as("SELECT id FROM universities WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|(id,)| id)
            .ok_or_else(|| DatabaseError::NotFound("University not found".to_string()))
    }
}
