//! SQLite Database - 数据库连接和迁移

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Pool, Sqlite};

use crate::application::ports::RepositoryError;

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 数据库连接串（sqlite:...）
    pub database_url: String,
    /// 最大连接数
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:/tmp/test.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

impl DatabaseConfig {
    pub fn new(database_url: impl Into<String>, max_connections: u32) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections,
        }
    }

    /// 内存数据库只能使用单连接，否则每个连接各自一个库
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }
}

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// 创建数据库连接池
///
/// PRAGMA 通过连接选项设置，池中每个连接都会生效
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        // 启用 WAL 模式，允许并发读写
        .journal_mode(SqliteJournalMode::Wal)
        // 遇到锁时等待而不是立即失败
        .busy_timeout(Duration::from_secs(5))
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "SQLite pool created with WAL mode, foreign keys and busy_timeout=5000ms"
    );

    Ok(pool)
}

/// 运行数据库迁移（幂等建表）
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    // user 表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS "user" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email VARCHAR(120) NOT NULL UNIQUE,
            password TEXT NOT NULL,
            is_active BOOLEAN NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // people 表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS people (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(120) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // planet 表
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS planet (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(120) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // favorites 表：两个可空目标外键 + 必填用户外键
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS favorites (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            planet_id INTEGER,
            people_id INTEGER,
            user_id INTEGER NOT NULL,
            FOREIGN KEY (planet_id) REFERENCES planet(id),
            FOREIGN KEY (people_id) REFERENCES people(id),
            FOREIGN KEY (user_id) REFERENCES "user"(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_favorites_user_id
        ON favorites(user_id)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database migrations completed");
    Ok(())
}

/// sqlx 错误转换为仓储错误，约束冲突单独归类
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() || db_err.is_unique_violation() {
            return RepositoryError::ConstraintViolation(db_err.message().to_string());
        }
    }
    RepositoryError::DatabaseError(err.to_string())
}

/// 测试用：已建表的内存数据库
#[cfg(test)]
pub(crate) async fn test_pool() -> DbPool {
    let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}
