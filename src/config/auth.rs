//! Authentication configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Auth provider configuration (GoTrue-compatible user-info endpoint)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Base URL of the auth service, e.g. `https://project.supabase.co/auth/v1`
    pub base_url: String,

    /// Publishable API key sent alongside user bearer tokens
    pub anon_key: String,
}

impl AuthConfig {
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH_BASE_URL"));
        }
        if self.anon_key.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH_ANON_KEY"));
        }
        if *environment == Environment::Production && !self.base_url.starts_with("https://") {
            return Err(ValidationError::AuthMustBeHttps);
        }
        Ok(())
    }
}
