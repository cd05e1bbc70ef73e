//! Static content HTTP surface.

pub mod handlers;
mod routes;

pub use routes::routes;
