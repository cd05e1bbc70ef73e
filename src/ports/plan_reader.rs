//! Read access to the subscription plan catalog.

use async_trait::async_trait;

use crate::domain::billing::SubscriptionPlan;
use crate::domain::foundation::{DomainError, PlanId};

#[async_trait]
pub trait PlanReader: Send + Sync {
    /// Looks up a plan by id. `Ok(None)` means the plan does not exist.
    async fn find_plan(&self, id: &PlanId) -> Result<Option<SubscriptionPlan>, DomainError>;
}
