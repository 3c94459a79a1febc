//! SQLite Person Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::{map_sqlx_error, DbPool};
use crate::application::ports::{PersonRecord, PersonRepositoryPort, RepositoryError};

/// SQLite Person Repository（表 `people`）
pub struct SqlitePersonRepository {
    pool: DbPool,
}

impl SqlitePersonRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PersonRow {
    id: i64,
    name: String,
}

impl From<PersonRow> for PersonRecord {
    fn from(row: PersonRow) -> Self {
        PersonRecord {
            id: row.id,
            name: row.name,
        }
    }
}

#[async_trait]
impl PersonRepositoryPort for SqlitePersonRepository {
    async fn insert(&self, name: &str) -> Result<PersonRecord, RepositoryError> {
        let result = sqlx::query("INSERT INTO people (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(PersonRecord {
            id: result.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PersonRecord>, RepositoryError> {
        let row: Option<PersonRow> = sqlx::query_as("SELECT id, name FROM people WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(PersonRecord::from))
    }

    async fn find_all(&self) -> Result<Vec<PersonRecord>, RepositoryError> {
        let rows: Vec<PersonRow> = sqlx::query_as("SELECT id, name FROM people ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(PersonRecord::from).collect())
    }
}
