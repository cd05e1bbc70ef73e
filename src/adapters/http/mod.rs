//! HTTP adapters: routes, handlers, middleware, and error mapping.

pub mod billing;
pub mod content;
pub mod error;
pub mod middleware;
mod router;
pub mod wisdom;

pub use billing::BillingState;
pub use error::ApiError;
pub use router::build_router;
pub use wisdom::WisdomState;
