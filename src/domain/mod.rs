//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - User Context: 操作用户标识
//! - Favorite Context: 收藏目标（Person 或 Planet，二选一）

pub mod favorite;
pub mod user;

pub use favorite::{FavoriteKind, FavoriteTarget};
pub use user::UserId;
