//! Session state shared between the auth listener and the rest of the app.

use crate::domain::foundation::AuthenticatedUser;
use crate::domain::profile::Profile;
use serde::Serialize;

/// Tri-state authentication status.
///
/// `Loading` covers the window between startup and the first definitive
/// answer from the auth provider. Consumers must treat it as "unknown",
/// never as "signed out".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthStatus {
    Loading,
    Authenticated,
    Unauthenticated,
}

impl AuthStatus {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, AuthStatus::Loading)
    }
}

/// An authenticated session as reported by the auth provider.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub user: AuthenticatedUser,
}

/// An auth-state change delivered to the session bridge.
///
/// `session: None` means a definitive sign-out, not an unknown state.
#[derive(Debug, Clone)]
pub struct SessionEvent {
    pub session: Option<Session>,
}

/// Point-in-time view of session state handed to consumers.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub status: AuthStatus,
    pub user: Option<AuthenticatedUser>,
    pub profile: Option<Profile>,
}

impl SessionSnapshot {
    pub fn loading() -> Self {
        Self {
            status: AuthStatus::Loading,
            user: None,
            profile: None,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            status: AuthStatus::Unauthenticated,
            user: None,
            profile: None,
        }
    }

    pub fn signed_in(user: AuthenticatedUser, profile: Profile) -> Self {
        Self {
            status: AuthStatus::Authenticated,
            user: Some(user),
            profile: Some(profile),
        }
    }

    pub fn is_premium(&self) -> bool {
        self.profile.as_ref().map(|p| p.is_premium).unwrap_or(false)
    }
}
