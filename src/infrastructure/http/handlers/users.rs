//! User HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ListUsers;
use crate::infrastructure::http::dto::UserResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取用户列表
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.list_users_handler.handle(ListUsers).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/favorites
///
/// 历史行为：返回全部用户而非收藏，客户端依赖该形状，保持不变。
/// 当前用户的收藏见 GET /favorites。
pub async fn list_favorite_users(
    state: State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    list_users(state).await
}
