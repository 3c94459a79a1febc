//! Favorite Command Handlers

use std::sync::Arc;

use crate::application::commands::{AddFavorite, RemoveFavorite};
use crate::application::error::ApplicationError;
use crate::application::ports::{FavoriteRecord, FavoriteRepositoryPort, NewFavorite};

// ============================================================================
// AddFavorite
// ============================================================================

/// AddFavorite Handler
pub struct AddFavoriteHandler {
    favorite_repo: Arc<dyn FavoriteRepositoryPort>,
}

impl AddFavoriteHandler {
    pub fn new(favorite_repo: Arc<dyn FavoriteRepositoryPort>) -> Self {
        Self { favorite_repo }
    }

    pub async fn handle(&self, command: AddFavorite) -> Result<FavoriteRecord, ApplicationError> {
        let favorite = self
            .favorite_repo
            .insert(&NewFavorite {
                user_id: command.user_id,
                target: command.target,
            })
            .await?;

        tracing::info!(
            favorite_id = favorite.id,
            user_id = %command.user_id,
            favorite_target = %command.target,
            "Favorite added"
        );

        Ok(favorite)
    }
}

// ============================================================================
// RemoveFavorite
// ============================================================================

/// RemoveFavorite Handler
///
/// 只删除第一条匹配的收藏；没有匹配时返回 NotFound
pub struct RemoveFavoriteHandler {
    favorite_repo: Arc<dyn FavoriteRepositoryPort>,
}

impl RemoveFavoriteHandler {
    pub fn new(favorite_repo: Arc<dyn FavoriteRepositoryPort>) -> Self {
        Self { favorite_repo }
    }

    pub async fn handle(&self, command: RemoveFavorite) -> Result<(), ApplicationError> {
        let target = command.target;

        let favorite = self
            .favorite_repo
            .find_first(command.user_id, target.people_id(), target.planet_id())
            .await?
            .ok_or_else(|| ApplicationError::not_found("Favorite", target))?;

        self.favorite_repo.delete(favorite.id).await?;

        tracing::info!(
            favorite_id = favorite.id,
            user_id = %command.user_id,
            favorite_target = %target,
            "Favorite removed"
        );

        Ok(())
    }
}
