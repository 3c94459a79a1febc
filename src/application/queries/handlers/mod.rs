//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod catalog_handlers;
mod favorite_handlers;
mod user_handlers;

pub use catalog_handlers::*;
pub use favorite_handlers::*;
pub use user_handlers::*;
