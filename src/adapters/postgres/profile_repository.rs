//! PostgreSQL implementation of ProfileRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::profile::Profile;
use crate::ports::ProfileRepository;

/// Reads and updates the `profiles` table.
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    email: Option<String>,
    name: Option<String>,
    created_at: DateTime<Utc>,
    is_premium: bool,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: UserId::from_uuid(row.id),
            email: row.email,
            name: row.name,
            created_at: Timestamp::from_datetime(row.created_at),
            is_premium: row.is_premium,
        }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Profile>, DomainError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            r#"
            SELECT id, email, name, created_at, is_premium
            FROM profiles
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to load profile: {}", e)))?;

        Ok(row.map(Profile::from))
    }

    async fn mark_premium(&self, id: &UserId) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            UPDATE profiles
            SET is_premium = TRUE, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update profile: {}", e)))?;

        Ok(())
    }
}
