//! Bearer token validation port.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Resolves a bearer token to an authenticated user.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    async fn validate(&self, access_token: &str) -> Result<AuthenticatedUser, AuthError>;
}
