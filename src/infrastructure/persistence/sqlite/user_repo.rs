//! SQLite User Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::{map_sqlx_error, DbPool};
use crate::application::ports::{NewUser, RepositoryError, UserRecord, UserRepositoryPort};
use crate::domain::UserId;

/// SQLite User Repository
pub struct SqliteUserRepository {
    pool: DbPool,
}

impl SqliteUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password: String,
    is_active: bool,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        UserRecord {
            id: UserId::new(row.id),
            email: row.email,
            password: row.password,
            is_active: row.is_active,
        }
    }
}

#[async_trait]
impl UserRepositoryPort for SqliteUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<UserRecord, RepositoryError> {
        let result = sqlx::query(r#"INSERT INTO "user" (email, password, is_active) VALUES (?, ?, ?)"#)
            .bind(&user.email)
            .bind(&user.password)
            .bind(user.is_active)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(UserRecord {
            id: UserId::new(result.last_insert_rowid()),
            email: user.email.clone(),
            password: user.password.clone(),
            is_active: user.is_active,
        })
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, RepositoryError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"SELECT id, email, password, is_active FROM "user" WHERE id = ?"#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(UserRecord::from))
    }

    async fn find_all(&self) -> Result<Vec<UserRecord>, RepositoryError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"SELECT id, email, password, is_active FROM "user" ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(UserRecord::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::test_pool;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password: "hunter2".to_string(),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = SqliteUserRepository::new(test_pool().await);

        let luke = repo.insert(&new_user("luke@rebels.org")).await.unwrap();
        let found = repo.find_by_id(luke.id).await.unwrap().unwrap();

        assert_eq!(found.email, "luke@rebels.org");
        assert_eq!(found.password, "hunter2");
        assert!(found.is_active);
        assert!(repo.find_by_id(UserId::new(404)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_in_insertion_order() {
        let repo = SqliteUserRepository::new(test_pool().await);
        assert!(repo.find_all().await.unwrap().is_empty());

        repo.insert(&new_user("a@example.com")).await.unwrap();
        repo.insert(&new_user("b@example.com")).await.unwrap();

        let emails: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.email)
            .collect();
        assert_eq!(emails, vec!["a@example.com", "b@example.com"]);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_constraint_violation() {
        let repo = SqliteUserRepository::new(test_pool().await);
        repo.insert(&new_user("leia@rebels.org")).await.unwrap();

        let err = repo.insert(&new_user("leia@rebels.org")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
    }
}
