//! Data Transfer Objects - 序列化层
//!
//! 实体到公开 JSON 表示的投影，敏感字段（如 password）不会出现在这里

use serde::Serialize;

use crate::application::{FavoriteRecord, PersonRecord, PlanetRecord, UserRecord};

/// GET /user 的问候响应
#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub msg: &'static str,
}

/// 用户：只暴露 id 与 email
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
}

impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id.as_i64(),
            email: record.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PersonResponse {
    pub id: i64,
    pub name: String,
}

impl From<PersonRecord> for PersonResponse {
    fn from(record: PersonRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlanetResponse {
    pub id: i64,
    pub name: String,
}

impl From<PlanetRecord> for PlanetResponse {
    fn from(record: PlanetRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
        }
    }
}

/// 收藏：`user` 为所属用户 ID，目标外键不输出
#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub id: i64,
    pub user: i64,
}

impl From<FavoriteRecord> for FavoriteResponse {
    fn from(record: FavoriteRecord) -> Self {
        Self {
            id: record.id,
            user: record.user_id.as_i64(),
        }
    }
}
