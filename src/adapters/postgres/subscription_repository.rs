//! PostgreSQL implementation of SubscriptionRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::billing::UserSubscription;
use crate::domain::foundation::DomainError;
use crate::ports::SubscriptionRepository;

/// Writes subscription rows to the `user_subscriptions` table.
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn insert(&self, subscription: &UserSubscription) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO user_subscriptions (
                id, user_id, plan_id, provider, payment_id, status,
                current_period_start, current_period_end
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(subscription.id.as_uuid())
        .bind(subscription.user_id.as_uuid())
        .bind(subscription.plan_id.as_uuid())
        .bind(subscription.provider.as_str())
        .bind(&subscription.payment_id)
        .bind(subscription.status.as_str())
        .bind(subscription.current_period_start.as_datetime())
        .bind(subscription.current_period_end.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to save subscription: {}", e)))?;

        Ok(())
    }
}
