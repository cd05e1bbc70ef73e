//! Ports: async trait boundaries between the application and the outside world.

mod payment_gateway;
mod payment_history;
mod plan_reader;
mod profile_repository;
mod session_validator;
mod subscription_repository;
mod wisdom_generator;

pub use payment_gateway::{PaymentError, PaymentGateway, PaymentProof, VerifiedPayment};
pub use payment_history::PaymentHistoryStore;
pub use plan_reader::PlanReader;
pub use profile_repository::ProfileRepository;
pub use session_validator::SessionValidator;
pub use subscription_repository::SubscriptionRepository;
pub use wisdom_generator::{GenerationError, WisdomGenerator};
