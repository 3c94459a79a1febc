//! Command Handlers 实现

mod favorite_handlers;

pub use favorite_handlers::*;
