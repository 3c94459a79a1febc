//! User Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{UserRecord, UserRepositoryPort};
use crate::application::queries::ListUsers;

/// ListUsers Handler
pub struct ListUsersHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl ListUsersHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(&self, _query: ListUsers) -> Result<Vec<UserRecord>, ApplicationError> {
        Ok(self.user_repo.find_all().await?)
    }
}
