use sqlx::PgPool;
use tracing::info;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::User;

const USER_COLUMNS: &str = "id, name, email, password, university_id, faculty_id, created_at";

/// Fields for a new account; `password_hash` is already bcrypt-hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub university_id: Option<i32>,
    pub faculty_id: Option<i32>,
}

/// University for a user enrolled in a faculty of `faculty_university`
fn reconcile_enrolment(
    requested: Option<i32>,
    faculty_university: i32,
) -> Result<i32, DatabaseError> {
    match requested {
        Some(id) if id != faculty_university => Err(DatabaseError::InvalidReference(
            "Faculty does not belong to the selected university".to_string(),
        )),
        _ => Ok(faculty_university),
    }
}

pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub async fn new() -> Result<Self, DatabaseError> {
        let pool = DatabaseManager::pool().await?;
        Ok(Self { pool })
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DatabaseError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn list(&self) -> Result<Vec<User>, DatabaseError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY id");
        let users = sqlx::query_as::<_, User>(&sql).fetch_all(&self.pool).await?;
        Ok(users)
    }

    /// Check an enrolment before insert. A faculty must exist and belong to the
    /// given university; when only the faculty is given its university is used.
    pub async fn resolve_enrolment(
        &self,
        university_id: Option<i32>,
        faculty_id: Option<i32>,
    ) -> Result<(Option<i32>, Option<i32>), DatabaseError> {
        let Some(faculty_id) = faculty_id else {
            return Ok((university_id, None));
        };

        let row: Option<(i32,)> = sqlx::query_as("SELECT university_id FROM faculties WHERE id = $1")
            .bind(faculty_id)
            .fetch_optional(&self.pool)
            .await?;

        let Some((faculty_university,)) = row else {
            return Err(DatabaseError::InvalidReference(
                "Referenced university or faculty does not exist".to_string(),
            ));
        };

        let university_id = reconcile_enrolment(university_id, faculty_university)?;
        Ok((Some(university_id), Some(faculty_id)))
    }

    /// Insert a user. A taken email surfaces as [`DatabaseError::Duplicate`].
    pub async fn create(&self, new_user: NewUser) -> Result<User, DatabaseError> {
        let sql = format!(
            "INSERT INTO users (name, email, password, university_id, faculty_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {USER_COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(&new_user.name)
            .bind(&new_user.email)
            .bind(&new_user.password_hash)
            .bind(new_user.university_id)
            .bind(new_user.faculty_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DatabaseError::on_write(e, "Email already in use"))?;

        info!("Registered user {} ({})", user.id, user.email);
        Ok(user)
    }

    pub async fn delete(&self, id: i32) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound("User not found".to_string()));
        }

        info!("Deleted user {}", id);
        Ok(())
    }

    pub async fn update_password(&self, id: i32, password_hash: &str) -> Result<(), DatabaseError> {
        let result = sqlx::query("UPDATE users SET password = $1 WHERE id = $2")
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound("User not found".to_string()));
        }

        info!("Changed password for user {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faculty_from_another_university_is_rejected() {
        let err = reconcile_enrolment(Some(2), 1).unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidReference(msg)
            if msg == "Faculty does not belong to the selected university"));
    }

    #[test]
    fn enrolment_university_follows_the_faculty() {
        assert_eq!(reconcile_enrolment(Some(1), 1).unwrap(), 1);
        assert_eq!(reconcile_enrolment(None, 3).unwrap(), 3);
    }
}
