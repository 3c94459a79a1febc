//! Favorite Context - 收藏限界上下文
//!
//! 职责:
//! - 收藏目标建模：一条收藏只指向一个 Person 或一个 Planet

mod value_objects;

pub use value_objects::{FavoriteKind, FavoriteTarget};
