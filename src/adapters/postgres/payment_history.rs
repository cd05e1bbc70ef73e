//! PostgreSQL implementation of PaymentHistoryStore.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::billing::PaymentRecord;
use crate::domain::foundation::DomainError;
use crate::ports::PaymentHistoryStore;

/// Appends rows to the `payment_history` table.
pub struct PostgresPaymentHistory {
    pool: PgPool,
}

impl PostgresPaymentHistory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentHistoryStore for PostgresPaymentHistory {
    async fn record(&self, payment: &PaymentRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO payment_history (
                id, user_id, subscription_id, provider, payment_id,
                amount, currency, status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(payment.id.as_uuid())
        .bind(payment.user_id.as_uuid())
        .bind(payment.subscription_id.as_uuid())
        .bind(payment.provider.as_str())
        .bind(&payment.payment_id)
        .bind(payment.amount)
        .bind(&payment.currency)
        .bind(payment.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to record payment: {}", e)))?;

        Ok(())
    }
}
