//! Subscription persistence port.

use async_trait::async_trait;

use crate::domain::billing::UserSubscription;
use crate::domain::foundation::DomainError;

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    async fn insert(&self, subscription: &UserSubscription) -> Result<(), DomainError>;
}
