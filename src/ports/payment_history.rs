//! Payment history persistence port.

use async_trait::async_trait;

use crate::domain::billing::PaymentRecord;
use crate::domain::foundation::DomainError;

#[async_trait]
pub trait PaymentHistoryStore: Send + Sync {
    async fn record(&self, payment: &PaymentRecord) -> Result<(), DomainError>;
}
