//! Favorite Commands

use crate::domain::{FavoriteTarget, UserId};

/// 添加收藏命令
#[derive(Debug, Clone)]
pub struct AddFavorite {
    pub user_id: UserId,
    pub target: FavoriteTarget,
}

/// 移除收藏命令
#[derive(Debug, Clone)]
pub struct RemoveFavorite {
    pub user_id: UserId,
    pub target: FavoriteTarget,
}
