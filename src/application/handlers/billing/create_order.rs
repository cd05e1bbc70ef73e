//! Create a provider order for a subscription plan.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::domain::billing::{BillingError, ProviderKind};
use crate::domain::foundation::PlanId;
use crate::ports::PlanReader;

use super::GatewaySet;

/// Request to open a checkout order with a payment provider.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    pub plan_id: PlanId,
    pub provider: ProviderKind,
}

/// The provider's order payload, passed through to the client untouched.
#[derive(Debug, Clone)]
pub struct CreateOrderResult {
    pub order: Value,
}

pub struct CreateOrderHandler {
    plans: Arc<dyn PlanReader>,
    gateways: GatewaySet,
}

impl CreateOrderHandler {
    pub fn new(plans: Arc<dyn PlanReader>, gateways: GatewaySet) -> Self {
        Self { plans, gateways }
    }

    pub async fn handle(&self, command: CreateOrderCommand) -> Result<CreateOrderResult, BillingError> {
        let plan = self
            .plans
            .find_plan(&command.plan_id)
            .await?
            .ok_or_else(|| BillingError::plan_not_found(command.plan_id))?;

        let gateway = self
            .gateways
            .for_provider(command.provider)
            .ok_or_else(|| BillingError::invalid_provider(command.provider.as_str()))?;

        let order = gateway.create_order(&plan).await.map_err(|err| {
            warn!(
                provider = %command.provider,
                code = %err.code,
                "order creation failed: {}", err.message
            );
            BillingError::gateway(err.message)
        })?;

        info!(provider = %command.provider, plan = %plan.name, "created checkout order");

        Ok(CreateOrderResult { order })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::billing::SubscriptionPlan;
    use crate::domain::foundation::DomainError;
    use crate::ports::{PaymentError, PaymentGateway, PaymentProof, VerifiedPayment};
    use async_trait::async_trait;
    use serde_json::json;

    struct StaticPlans(Option<SubscriptionPlan>);

    #[async_trait]
    impl PlanReader for StaticPlans {
        async fn find_plan(&self, _id: &PlanId) -> Result<Option<SubscriptionPlan>, DomainError> {
            Ok(self.0.clone())
        }
    }

    struct StubGateway {
        kind: ProviderKind,
        response: Result<Value, String>,
    }

    #[async_trait]
    impl PaymentGateway for StubGateway {
        fn provider(&self) -> ProviderKind {
            self.kind
        }

        async fn create_order(&self, _plan: &SubscriptionPlan) -> Result<Value, PaymentError> {
            self.response
                .clone()
                .map_err(|m| PaymentError::new("gateway_rejected", m))
        }

        async fn verify_payment(
            &self,
            _proof: &PaymentProof,
        ) -> Result<VerifiedPayment, PaymentError> {
            unreachable!("not exercised here")
        }
    }

    fn premium_plan() -> SubscriptionPlan {
        SubscriptionPlan::new(PlanId::new(), "Premium", 499.0, "INR")
    }

    fn handler(plan: Option<SubscriptionPlan>, gateway: StubGateway) -> CreateOrderHandler {
        CreateOrderHandler::new(
            Arc::new(StaticPlans(plan)),
            GatewaySet::new(vec![Arc::new(gateway)]),
        )
    }

    #[tokio::test]
    async fn returns_the_provider_order_payload() {
        let handler = handler(
            Some(premium_plan()),
            StubGateway {
                kind: ProviderKind::Razorpay,
                response: Ok(json!({"id": "order_123", "amount": 49900})),
            },
        );

        let result = handler
            .handle(CreateOrderCommand {
                plan_id: PlanId::new(),
                provider: ProviderKind::Razorpay,
            })
            .await
            .unwrap();

        assert_eq!(result.order["id"], "order_123");
    }

    #[tokio::test]
    async fn unknown_plan_is_rejected_before_the_gateway_is_called() {
        let handler = handler(
            None,
            StubGateway {
                kind: ProviderKind::Razorpay,
                response: Ok(json!({})),
            },
        );

        let err = handler
            .handle(CreateOrderCommand {
                plan_id: PlanId::new(),
                provider: ProviderKind::Razorpay,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, BillingError::PlanNotFound(_)));
    }

    #[tokio::test]
    async fn unconfigured_provider_is_rejected() {
        let handler = handler(
            Some(premium_plan()),
            StubGateway {
                kind: ProviderKind::Razorpay,
                response: Ok(json!({})),
            },
        );

        let err = handler
            .handle(CreateOrderCommand {
                plan_id: PlanId::new(),
                provider: ProviderKind::Paypal,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, BillingError::InvalidProvider(_)));
    }

    #[tokio::test]
    async fn gateway_failures_surface_as_gateway_errors() {
        let handler = handler(
            Some(premium_plan()),
            StubGateway {
                kind: ProviderKind::Paypal,
                response: Err("token endpoint returned 500".to_string()),
            },
        );

        let err = handler
            .handle(CreateOrderCommand {
                plan_id: PlanId::new(),
                provider: ProviderKind::Paypal,
            })
            .await
            .unwrap_err();

        assert!(err.message().contains("token endpoint returned 500"));
    }
}
