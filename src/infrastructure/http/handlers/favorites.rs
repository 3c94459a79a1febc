//! Favorite HTTP Handlers
//!
//! 所有收藏操作都以 `ActingUser` 的身份执行

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::application::{AddFavorite, ListFavorites, RemoveFavorite};
use crate::domain::{FavoriteKind, FavoriteTarget};
use crate::infrastructure::http::dto::FavoriteResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{ActingUser, EntityId};
use crate::infrastructure::http::state::AppState;

/// 当前用户的收藏列表
pub async fn list_favorites(
    State(state): State<Arc<AppState>>,
    ActingUser(user_id): ActingUser,
) -> Result<Json<Vec<FavoriteResponse>>, ApiError> {
    let favorites = state
        .list_favorites_handler
        .handle(ListFavorites { user_id })
        .await?;

    Ok(Json(favorites.into_iter().map(FavoriteResponse::from).collect()))
}

/// 收藏星球
pub async fn add_favorite_planet(
    State(state): State<Arc<AppState>>,
    acting: ActingUser,
    EntityId(planet_id): EntityId,
) -> Result<(StatusCode, Json<FavoriteResponse>), ApiError> {
    add_favorite(&state, acting, FavoriteTarget::new(FavoriteKind::Planet, planet_id)).await
}

/// 收藏人物
pub async fn add_favorite_person(
    State(state): State<Arc<AppState>>,
    acting: ActingUser,
    EntityId(people_id): EntityId,
) -> Result<(StatusCode, Json<FavoriteResponse>), ApiError> {
    add_favorite(&state, acting, FavoriteTarget::new(FavoriteKind::Person, people_id)).await
}

/// 取消收藏星球
pub async fn remove_favorite_planet(
    State(state): State<Arc<AppState>>,
    acting: ActingUser,
    EntityId(planet_id): EntityId,
) -> Result<StatusCode, ApiError> {
    remove_favorite(&state, acting, FavoriteTarget::new(FavoriteKind::Planet, planet_id)).await
}

/// 取消收藏人物
pub async fn remove_favorite_person(
    State(state): State<Arc<AppState>>,
    acting: ActingUser,
    EntityId(people_id): EntityId,
) -> Result<StatusCode, ApiError> {
    remove_favorite(&state, acting, FavoriteTarget::new(FavoriteKind::Person, people_id)).await
}

async fn add_favorite(
    state: &AppState,
    ActingUser(user_id): ActingUser,
    target: FavoriteTarget,
) -> Result<(StatusCode, Json<FavoriteResponse>), ApiError> {
    let favorite = state
        .add_favorite_handler
        .handle(AddFavorite { user_id, target })
        .await?;

    Ok((StatusCode::CREATED, Json(FavoriteResponse::from(favorite))))
}

async fn remove_favorite(
    state: &AppState,
    ActingUser(user_id): ActingUser,
    target: FavoriteTarget,
) -> Result<StatusCode, ApiError> {
    state
        .remove_favorite_handler
        .handle(RemoveFavorite { user_id, target })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
