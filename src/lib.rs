//! Holonet - 星战参考数据与收藏 API
//!
//! 架构设计: CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - User Context: 操作用户标识
//! - Favorite Context: 收藏目标（Person XOR Planet）
//!
//! 应用层 (application/):
//! - Ports: 仓储端口（User, Person, Planet, Favorite）
//! - Commands: 添加 / 移除收藏
//! - Queries: 人物、星球、用户、收藏的读取
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful JSON API
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
