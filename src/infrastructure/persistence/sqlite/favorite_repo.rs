//! SQLite Favorite Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::{map_sqlx_error, DbPool};
use crate::application::ports::{
    FavoriteRecord, FavoriteRepositoryPort, NewFavorite, RepositoryError,
};
use crate::domain::UserId;

/// SQLite Favorite Repository
pub struct SqliteFavoriteRepository {
    pool: DbPool,
}

impl SqliteFavoriteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct FavoriteRow {
    id: i64,
    planet_id: Option<i64>,
    people_id: Option<i64>,
    user_id: i64,
}

impl From<FavoriteRow> for FavoriteRecord {
    fn from(row: FavoriteRow) -> Self {
        FavoriteRecord {
            id: row.id,
            user_id: UserId::new(row.user_id),
            people_id: row.people_id,
            planet_id: row.planet_id,
        }
    }
}

#[async_trait]
impl FavoriteRepositoryPort for SqliteFavoriteRepository {
    async fn insert(&self, favorite: &NewFavorite) -> Result<FavoriteRecord, RepositoryError> {
        let people_id = favorite.target.people_id();
        let planet_id = favorite.target.planet_id();

        let result =
            sqlx::query("INSERT INTO favorites (planet_id, people_id, user_id) VALUES (?, ?, ?)")
                .bind(planet_id)
                .bind(people_id)
                .bind(favorite.user_id.as_i64())
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(FavoriteRecord {
            id: result.last_insert_rowid(),
            user_id: favorite.user_id,
            people_id,
            planet_id,
        })
    }

    async fn find_first(
        &self,
        user_id: UserId,
        people_id: Option<i64>,
        planet_id: Option<i64>,
    ) -> Result<Option<FavoriteRecord>, RepositoryError> {
        // NULL 参数表示该列不参与过滤
        let row: Option<FavoriteRow> = sqlx::query_as(
            r#"
            SELECT id, planet_id, people_id, user_id FROM favorites
            WHERE user_id = ?1
              AND (?2 IS NULL OR people_id = ?2)
              AND (?3 IS NULL OR planet_id = ?3)
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(user_id.as_i64())
        .bind(people_id)
        .bind(planet_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(FavoriteRecord::from))
    }

    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<FavoriteRecord>, RepositoryError> {
        let rows: Vec<FavoriteRow> = sqlx::query_as(
            "SELECT id, planet_id, people_id, user_id FROM favorites WHERE user_id = ? ORDER BY id",
        )
        .bind(user_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(FavoriteRecord::from).collect())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM favorites WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}
