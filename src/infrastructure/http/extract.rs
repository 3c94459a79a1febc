//! Request Extractors
//!
//! - `EntityId`: 路径中的整数 ID，非整数或溢出按 404 处理
//! - `ActingUser`: 收藏操作的执行用户

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use super::error::ApiError;
use super::state::AppState;
use crate::domain::UserId;

/// 路径中的实体 ID
///
/// 与整数路由转换器一致：段不是 i64 时视为路由不匹配
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                if rejection.status().is_client_error() {
                    ApiError::NotFound(rejection.body_text())
                } else {
                    ApiError::Internal(rejection.body_text())
                }
            })?;

        Ok(EntityId(id))
    }
}

/// 执行收藏操作的用户
///
/// 目前没有认证层，始终解析为配置中的默认用户
#[derive(Debug, Clone, Copy)]
pub struct ActingUser(pub UserId);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for ActingUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        Ok(ActingUser(state.acting_user))
    }
}
