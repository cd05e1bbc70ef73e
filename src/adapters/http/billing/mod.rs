//! Billing HTTP surface.

pub mod dto;
pub mod handlers;
mod routes;

pub use handlers::BillingState;
pub use routes::routes;
