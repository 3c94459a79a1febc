//! SQLite Planet Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::{map_sqlx_error, DbPool};
use crate::application::ports::{PlanetRecord, PlanetRepositoryPort, RepositoryError};

/// SQLite Planet Repository（表 `planet`）
pub struct SqlitePlanetRepository {
    pool: DbPool,
}

impl SqlitePlanetRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PlanetRow {
    id: i64,
    name: String,
}

impl From<PlanetRow> for PlanetRecord {
    fn from(row: PlanetRow) -> Self {
        PlanetRecord {
            id: row.id,
            name: row.name,
        }
    }
}

#[async_trait]
impl PlanetRepositoryPort for SqlitePlanetRepository {
    async fn insert(&self, name: &str) -> Result<PlanetRecord, RepositoryError> {
        let result = sqlx::query("INSERT INTO planet (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(PlanetRecord {
            id: result.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PlanetRecord>, RepositoryError> {
        let row: Option<PlanetRow> = sqlx::query_as("SELECT id, name FROM planet WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(PlanetRecord::from))
    }

    async fn find_all(&self) -> Result<Vec<PlanetRecord>, RepositoryError> {
        let rows: Vec<PlanetRow> = sqlx::query_as("SELECT id, name FROM planet ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(PlanetRecord::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::test_pool;

    #[tokio::test]
    async fn test_insert_find_and_list() {
        let repo = SqlitePlanetRepository::new(test_pool().await);

        let tatooine = repo.insert("Tatooine").await.unwrap();
        let hoth = repo.insert("Hoth").await.unwrap();

        let found = repo.find_by_id(hoth.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Hoth");
        assert_eq!(repo.find_all().await.unwrap(), vec![tatooine, hoth]);
        assert!(repo.find_by_id(999).await.unwrap().is_none());
    }
}
