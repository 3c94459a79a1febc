//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（User / Person / Planet / Favorite 仓储）
//! - commands: CQRS 命令及处理器（收藏的添加与移除）
//! - queries: CQRS 查询及处理器（参考数据、用户、收藏的读取）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{AddFavoriteHandler, RemoveFavoriteHandler},
    AddFavorite, RemoveFavorite,
};

pub use error::ApplicationError;

pub use ports::{
    FavoriteRecord, FavoriteRepositoryPort, NewFavorite, NewUser, PersonRecord,
    PersonRepositoryPort, PlanetRecord, PlanetRepositoryPort, RepositoryError, UserRecord,
    UserRepositoryPort,
};

pub use queries::{
    handlers::{
        GetPersonHandler, GetPlanetHandler, ListFavoritesHandler, ListPeopleHandler,
        ListPlanetsHandler, ListUsersHandler,
    },
    GetPerson, GetPlanet, ListFavorites, ListPeople, ListPlanets, ListUsers,
};
