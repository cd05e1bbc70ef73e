//! PostgreSQL implementation of PlanReader.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::billing::SubscriptionPlan;
use crate::domain::foundation::{DomainError, PlanId};
use crate::ports::PlanReader;

/// Reads the plan catalog from the `subscription_plans` table.
pub struct PostgresPlanReader {
    pool: PgPool,
}

impl PostgresPlanReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct PlanRow {
    id: Uuid,
    name: String,
    price: f64,
    currency: String,
}

impl From<PlanRow> for SubscriptionPlan {
    fn from(row: PlanRow) -> Self {
        SubscriptionPlan {
            id: PlanId::from_uuid(row.id),
            name: row.name,
            price: row.price,
            currency: row.currency,
        }
    }
}

#[async_trait]
impl PlanReader for PostgresPlanReader {
    async fn find_plan(&self, id: &PlanId) -> Result<Option<SubscriptionPlan>, DomainError> {
        let row: Option<PlanRow> = sqlx::query_as(
            r#"
            SELECT id, name, price, currency
            FROM subscription_plans
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to load plan: {}", e)))?;

        Ok(row.map(SubscriptionPlan::from))
    }
}
