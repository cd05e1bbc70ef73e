//! User profile entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

/// A user's profile row.
///
/// `is_premium` is the entitlement flag flipped as a side effect of a
/// verified payment; nothing in this flow ever sets it back to false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub email: Option<String>,
    pub name: Option<String>,
    pub created_at: Timestamp,
    pub is_premium: bool,
}

impl Profile {
    /// Creates a fresh non-premium profile.
    pub fn new(id: UserId, email: Option<String>, name: Option<String>) -> Self {
        Self {
            id,
            email,
            name,
            created_at: Timestamp::now(),
            is_premium: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_profile_starts_non_premium() {
        let profile = Profile::new(UserId::new(), Some("a@example.com".into()), None);
        assert!(!profile.is_premium);
    }
}
