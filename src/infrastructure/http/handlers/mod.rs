//! HTTP Handlers

mod favorites;
mod greeting;
mod people;
mod planets;
mod users;

pub use favorites::*;
pub use greeting::*;
pub use people::*;
pub use planets::*;
pub use users::*;
