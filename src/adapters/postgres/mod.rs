//! PostgreSQL persistence adapters.

mod payment_history;
mod plan_reader;
mod profile_repository;
mod subscription_repository;

pub use payment_history::PostgresPaymentHistory;
pub use plan_reader::PostgresPlanReader;
pub use profile_repository::PostgresProfileRepository;
pub use subscription_repository::PostgresSubscriptionRepository;
