//! Application State
//!
//! 包含仓储端口与所有 Command/Query Handlers

use std::sync::Arc;

use crate::application::{
    // Command handlers
    AddFavoriteHandler, RemoveFavoriteHandler,
    // Query handlers
    GetPersonHandler, GetPlanetHandler, ListFavoritesHandler, ListPeopleHandler,
    ListPlanetsHandler, ListUsersHandler,
    // Ports
    FavoriteRepositoryPort, PersonRepositoryPort, PlanetRepositoryPort, UserRepositoryPort,
};
use crate::domain::UserId;

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub user_repo: Arc<dyn UserRepositoryPort>,
    pub person_repo: Arc<dyn PersonRepositoryPort>,
    pub planet_repo: Arc<dyn PlanetRepositoryPort>,
    pub favorite_repo: Arc<dyn FavoriteRepositoryPort>,

    /// 收藏操作的执行用户（尚无认证层）
    pub acting_user: UserId,

    // ========== Command Handlers ==========
    pub add_favorite_handler: AddFavoriteHandler,
    pub remove_favorite_handler: RemoveFavoriteHandler,

    // ========== Query Handlers ==========
    pub get_person_handler: GetPersonHandler,
    pub list_people_handler: ListPeopleHandler,
    pub get_planet_handler: GetPlanetHandler,
    pub list_planets_handler: ListPlanetsHandler,
    pub list_users_handler: ListUsersHandler,
    pub list_favorites_handler: ListFavoritesHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        person_repo: Arc<dyn PersonRepositoryPort>,
        planet_repo: Arc<dyn PlanetRepositoryPort>,
        favorite_repo: Arc<dyn FavoriteRepositoryPort>,
        acting_user: UserId,
    ) -> Self {
        Self {
            // Command handlers
            add_favorite_handler: AddFavoriteHandler::new(favorite_repo.clone()),
            remove_favorite_handler: RemoveFavoriteHandler::new(favorite_repo.clone()),

            // Query handlers
            get_person_handler: GetPersonHandler::new(person_repo.clone()),
            list_people_handler: ListPeopleHandler::new(person_repo.clone()),
            get_planet_handler: GetPlanetHandler::new(planet_repo.clone()),
            list_planets_handler: ListPlanetsHandler::new(planet_repo.clone()),
            list_users_handler: ListUsersHandler::new(user_repo.clone()),
            list_favorites_handler: ListFavoritesHandler::new(favorite_repo.clone()),

            // Ports
            user_repo,
            person_repo,
            planet_repo,
            favorite_repo,
            acting_user,
        }
    }
}
