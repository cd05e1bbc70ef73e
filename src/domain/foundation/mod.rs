//! Foundation value objects shared across domain modules.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{PaymentRecordId, PlanId, SubscriptionId, UserId};
pub use timestamp::Timestamp;
