//! Wisdom HTTP surface.

pub mod dto;
pub mod handlers;
mod routes;

pub use handlers::WisdomState;
pub use routes::routes;
