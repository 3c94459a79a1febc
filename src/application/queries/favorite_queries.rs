//! Favorite Queries

use crate::domain::UserId;

/// 列出用户收藏查询
#[derive(Debug, Clone)]
pub struct ListFavorites {
    pub user_id: UserId,
}
