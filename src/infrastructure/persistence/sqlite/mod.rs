//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod favorite_repo;
mod person_repo;
mod planet_repo;
mod user_repo;

pub use database::*;
pub use favorite_repo::*;
pub use person_repo::*;
pub use planet_repo::*;
pub use user_repo::*;
