//! User Context - 用户限界上下文
//!
//! 职责:
//! - 用户标识（收藏操作的执行者）

mod value_objects;

pub use value_objects::UserId;
