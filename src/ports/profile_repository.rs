//! Profile persistence port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::profile::Profile;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Fetches a profile. `Ok(None)` means no row exists for the user.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Profile>, DomainError>;

    /// Flips the premium entitlement flag for a user.
    async fn mark_premium(&self, id: &UserId) -> Result<(), DomainError>;
}
