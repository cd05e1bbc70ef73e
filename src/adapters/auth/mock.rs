//! In-memory session validator for tests and local development.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::SessionValidator;

/// Validator backed by a fixed token-to-user table. Any token not in the
/// table is invalid.
#[derive(Default)]
pub struct MockSessionValidator {
    users: HashMap<String, AuthenticatedUser>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.users.insert(token.into(), user);
        self
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, access_token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.users
            .get(access_token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
