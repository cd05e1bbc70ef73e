//! Service entry point: configuration, wiring, and the axum server.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bhagwat_wisdom::adapters::ai::GeminiGenerator;
use bhagwat_wisdom::adapters::auth::GotrueValidator;
use bhagwat_wisdom::adapters::http::middleware::AuthState;
use bhagwat_wisdom::adapters::http::{build_router, BillingState, WisdomState};
use bhagwat_wisdom::adapters::payments::{PaypalGateway, RazorpayGateway};
use bhagwat_wisdom::adapters::postgres::{
    PostgresPaymentHistory, PostgresPlanReader, PostgresProfileRepository,
    PostgresSubscriptionRepository,
};
use bhagwat_wisdom::application::handlers::billing::{
    CreateOrderHandler, GatewaySet, VerifyPaymentHandler,
};
use bhagwat_wisdom::application::handlers::wisdom::{
    GetWisdomHandler, InterpretDreamHandler, SolveProblemHandler,
};
use bhagwat_wisdom::config::AppConfig;
use bhagwat_wisdom::ports::PaymentGateway;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    info!(environment = ?config.server.environment, "starting bhagwat-wisdom");

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let mut gateways: Vec<Arc<dyn PaymentGateway>> = Vec::new();
    if let Some(paypal) = &config.payment.paypal {
        info!(sandbox = paypal.is_sandbox(), "PayPal gateway enabled");
        gateways.push(Arc::new(PaypalGateway::new(paypal)));
    }
    if let Some(razorpay) = &config.payment.razorpay {
        info!("Razorpay gateway enabled");
        gateways.push(Arc::new(RazorpayGateway::new(razorpay)));
    }
    let gateways = GatewaySet::new(gateways);

    let plans = Arc::new(PostgresPlanReader::new(pool.clone()));
    let subscriptions = Arc::new(PostgresSubscriptionRepository::new(pool.clone()));
    let payments = Arc::new(PostgresPaymentHistory::new(pool.clone()));
    let profiles = Arc::new(PostgresProfileRepository::new(pool.clone()));

    let billing_state = BillingState {
        create_order: Arc::new(CreateOrderHandler::new(plans.clone(), gateways.clone())),
        verify_payment: Arc::new(VerifyPaymentHandler::new(
            plans,
            gateways,
            subscriptions,
            payments,
            profiles,
        )),
    };

    if !config.ai.is_configured() {
        info!("no Gemini API key configured, serving fallback guidance only");
    }
    let generator = Arc::new(GeminiGenerator::new(&config.ai));
    let wisdom_state = WisdomState {
        get_wisdom: Arc::new(GetWisdomHandler::new(generator.clone())),
        solve_problem: Arc::new(SolveProblemHandler::new(generator.clone())),
        interpret_dream: Arc::new(InterpretDreamHandler::new(generator)),
    };

    let auth_state: AuthState = Arc::new(GotrueValidator::new(&config.auth));

    let router = build_router(
        billing_state,
        wisdom_state,
        auth_state,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let addr = config.server.socket_addr();
    info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    info!("shutdown signal received");
}
