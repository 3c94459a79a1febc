//! Favorite Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{FavoriteRecord, FavoriteRepositoryPort};
use crate::application::queries::ListFavorites;

/// ListFavorites Handler
pub struct ListFavoritesHandler {
    favorite_repo: Arc<dyn FavoriteRepositoryPort>,
}

impl ListFavoritesHandler {
    pub fn new(favorite_repo: Arc<dyn FavoriteRepositoryPort>) -> Self {
        Self { favorite_repo }
    }

    pub async fn handle(
        &self,
        query: ListFavorites,
    ) -> Result<Vec<FavoriteRecord>, ApplicationError> {
        Ok(self.favorite_repo.find_by_user(query.user_id).await?)
    }
}
