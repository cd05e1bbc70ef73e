//! GoTrue session validator adapter.
//!
//! Resolves a bearer token by calling the provider's user-info endpoint
//! (`GET /user`). No local token parsing: the provider is the authority on
//! token validity and revocation.

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// GoTrue-backed session validator.
pub struct GotrueValidator {
    base_url: String,
    anon_key: String,
    http_client: reqwest::Client,
}

#[derive(Deserialize)]
struct UserInfo {
    id: String,
    email: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Deserialize, Default)]
struct UserMetadata {
    name: Option<String>,
    full_name: Option<String>,
}

impl GotrueValidator {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key.clone(),
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SessionValidator for GotrueValidator {
    async fn validate(&self, access_token: &str) -> Result<AuthenticatedUser, AuthError> {
        let response = self
            .http_client
            .get(format!("{}/user", self.base_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::service_unavailable(e.to_string()))?;

        match response.status() {
            status if status.is_success() => {}
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                return Err(AuthError::InvalidToken);
            }
            reqwest::StatusCode::NOT_FOUND => return Err(AuthError::UserNotFound),
            status => {
                return Err(AuthError::service_unavailable(format!(
                    "user endpoint returned {status}"
                )));
            }
        }

        let info: UserInfo = response
            .json()
            .await
            .map_err(|e| AuthError::service_unavailable(format!("unparseable user info: {e}")))?;

        let id = Uuid::parse_str(&info.id).map_err(|_| AuthError::InvalidToken)?;
        let email = info.email.ok_or(AuthError::InvalidToken)?;
        let display_name = info.user_metadata.name.or(info.user_metadata.full_name);

        Ok(AuthenticatedUser::new(
            UserId::from_uuid(id),
            email,
            display_name,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let validator = GotrueValidator::new(&AuthConfig {
            base_url: "https://project.supabase.co/auth/v1/".to_string(),
            anon_key: "anon".to_string(),
        });
        assert_eq!(validator.base_url, "https://project.supabase.co/auth/v1");
    }

    #[test]
    fn user_metadata_prefers_name_over_full_name() {
        let info: UserInfo = serde_json::from_value(serde_json::json!({
            "id": "7c9e6679-7425-40de-944b-e07fc1f90ae7",
            "email": "seeker@example.com",
            "user_metadata": { "name": "Asha", "full_name": "Asha Rao" },
        }))
        .unwrap();
        assert_eq!(
            info.user_metadata.name.or(info.user_metadata.full_name),
            Some("Asha".to_string())
        );
    }
}
