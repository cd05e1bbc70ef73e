//! Billing domain: plans, subscriptions, and payment records.
//!
//! The data model mirrors the managed store: `subscription_plans` is
//! read-only reference data, `user_subscriptions` gains one row per verified
//! payment, and `payment_history` is an append-only log.

mod errors;
mod payment;
mod plan;
mod provider;
mod subscription;

pub use errors::BillingError;
pub use payment::{PaymentRecord, PaymentStatus};
pub use plan::SubscriptionPlan;
pub use provider::ProviderKind;
pub use subscription::{SubscriptionStatus, UserSubscription};
