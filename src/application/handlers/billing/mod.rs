//! Billing use cases: order creation and payment verification.

mod create_order;
mod verify_payment;

pub use create_order::{CreateOrderCommand, CreateOrderHandler, CreateOrderResult};
pub use verify_payment::{VerifyPaymentCommand, VerifyPaymentHandler, VerifyPaymentResult};

use std::sync::Arc;

use crate::domain::billing::ProviderKind;
use crate::ports::PaymentGateway;

/// The set of configured payment gateways, selected by provider tag.
#[derive(Clone)]
pub struct GatewaySet {
    gateways: Vec<Arc<dyn PaymentGateway>>,
}

impl GatewaySet {
    pub fn new(gateways: Vec<Arc<dyn PaymentGateway>>) -> Self {
        Self { gateways }
    }

    pub fn for_provider(&self, provider: ProviderKind) -> Option<Arc<dyn PaymentGateway>> {
        self.gateways
            .iter()
            .find(|g| g.provider() == provider)
            .cloned()
    }
}
