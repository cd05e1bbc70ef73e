//! Verify a completed payment and activate the subscription.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::domain::billing::{BillingError, PaymentRecord, ProviderKind, UserSubscription};
use crate::domain::foundation::{PlanId, Timestamp, UserId};
use crate::ports::{
    PaymentHistoryStore, PaymentProof, PlanReader, ProfileRepository, SubscriptionRepository,
};

use super::GatewaySet;

/// Client-submitted proof that a checkout completed.
#[derive(Debug, Clone)]
pub struct VerifyPaymentCommand {
    pub user_id: UserId,
    pub plan_id: PlanId,
    pub provider: ProviderKind,
    pub proof: PaymentProof,
}

#[derive(Debug, Clone)]
pub struct VerifyPaymentResult {
    pub subscription: UserSubscription,
}

/// Runs the verification flow: gateway check, then the persistence sequence.
///
/// The three writes are not one transaction. A subscription insert that
/// succeeds followed by a payment-history failure leaves the subscription
/// row in place, and a failed premium flip is logged but does not fail the
/// request.
pub struct VerifyPaymentHandler {
    plans: Arc<dyn PlanReader>,
    gateways: GatewaySet,
    subscriptions: Arc<dyn SubscriptionRepository>,
    payments: Arc<dyn PaymentHistoryStore>,
    profiles: Arc<dyn ProfileRepository>,
}

impl VerifyPaymentHandler {
    pub fn new(
        plans: Arc<dyn PlanReader>,
        gateways: GatewaySet,
        subscriptions: Arc<dyn SubscriptionRepository>,
        payments: Arc<dyn PaymentHistoryStore>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            plans,
            gateways,
            subscriptions,
            payments,
            profiles,
        }
    }

    pub async fn handle(
        &self,
        command: VerifyPaymentCommand,
    ) -> Result<VerifyPaymentResult, BillingError> {
        let plan = self
            .plans
            .find_plan(&command.plan_id)
            .await?
            .ok_or_else(|| BillingError::plan_not_found(command.plan_id))?;

        let gateway = self
            .gateways
            .for_provider(command.provider)
            .ok_or_else(|| BillingError::invalid_provider(command.provider.as_str()))?;

        let verified = gateway.verify_payment(&command.proof).await.map_err(|err| {
            warn!(
                provider = %command.provider,
                code = %err.code,
                "payment verification failed: {}", err.message
            );
            if err.code == "verification_failed" {
                BillingError::verification_failed(err.message)
            } else {
                BillingError::gateway(err.message)
            }
        })?;

        let subscription = UserSubscription::activated(
            command.user_id,
            command.plan_id,
            verified.provider,
            verified.payment_id.clone(),
            Timestamp::now(),
        );

        self.subscriptions.insert(&subscription).await?;

        let record = PaymentRecord::completed(
            command.user_id,
            subscription.id,
            verified.provider,
            verified.payment_id,
            plan.price,
            plan.currency.clone(),
        );
        self.payments.record(&record).await?;

        // The entitlement flip is best-effort; the subscription row is the
        // source of truth and has already been written.
        if let Err(err) = self.profiles.mark_premium(&command.user_id).await {
            error!(user = %command.user_id, "failed to flip premium flag: {err}");
        }

        info!(
            user = %command.user_id,
            provider = %command.provider,
            subscription = %subscription.id,
            "subscription activated"
        );

        Ok(VerifyPaymentResult { subscription })
    }
}
