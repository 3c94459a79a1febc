//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{FavoriteTarget, UserId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// 外键或唯一约束被违反
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

// ============================================================================
// User Repository
// ============================================================================

/// 用户实体（用于持久化）
///
/// `password` 只写不读：序列化层从不输出该字段
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: UserId,
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

/// 新建用户参数
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub is_active: bool,
}

/// User Repository Port
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// 插入用户并返回分配的 ID
    async fn insert(&self, user: &NewUser) -> Result<UserRecord, RepositoryError>;

    /// 根据 ID 查找用户
    async fn find_by_id(&self, id: UserId) -> Result<Option<UserRecord>, RepositoryError>;

    /// 获取所有用户（按插入顺序）
    async fn find_all(&self) -> Result<Vec<UserRecord>, RepositoryError>;
}

// ============================================================================
// People / Planet Repository
// ============================================================================

/// 人物实体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    pub id: i64,
    pub name: String,
}

/// 星球实体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanetRecord {
    pub id: i64,
    pub name: String,
}

/// Person Repository Port
#[async_trait]
pub trait PersonRepositoryPort: Send + Sync {
    async fn insert(&self, name: &str) -> Result<PersonRecord, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<PersonRecord>, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<PersonRecord>, RepositoryError>;
}

/// Planet Repository Port
#[async_trait]
pub trait PlanetRepositoryPort: Send + Sync {
    async fn insert(&self, name: &str) -> Result<PlanetRecord, RepositoryError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<PlanetRecord>, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<PlanetRecord>, RepositoryError>;
}

// ============================================================================
// Favorite Repository
// ============================================================================

/// 收藏实体（用于持久化）
///
/// 与表结构一致：两个目标外键均可为空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteRecord {
    pub id: i64,
    pub user_id: UserId,
    pub people_id: Option<i64>,
    pub planet_id: Option<i64>,
}

/// 新建收藏参数
#[derive(Debug, Clone, Copy)]
pub struct NewFavorite {
    pub user_id: UserId,
    pub target: FavoriteTarget,
}

/// Favorite Repository Port
#[async_trait]
pub trait FavoriteRepositoryPort: Send + Sync {
    /// 插入收藏并立即提交
    async fn insert(&self, favorite: &NewFavorite) -> Result<FavoriteRecord, RepositoryError>;

    /// 按条件查找第一条收藏
    ///
    /// 为 `None` 的过滤条件不参与匹配；多条命中时返回 ID 最小的一条
    async fn find_first(
        &self,
        user_id: UserId,
        people_id: Option<i64>,
        planet_id: Option<i64>,
    ) -> Result<Option<FavoriteRecord>, RepositoryError>;

    /// 获取用户的所有收藏
    async fn find_by_user(&self, user_id: UserId) -> Result<Vec<FavoriteRecord>, RepositoryError>;

    /// 删除收藏（不存在时不报错）
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
