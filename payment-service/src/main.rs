use std::{env, net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;
use tracing::info;

use payment_service::app::build_router;
use payment_service::config::PaymentConfig;
use payment_service::gateway::RazorpayClient;
use payment_service::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let config = PaymentConfig::from_env();
    if config.credentials().is_none() {
        // The service still starts; order creation answers with a generic
        // configuration error until both secrets are present.
        tracing::warn!("payment gateway credentials are not configured");
    }

    let gateway = RazorpayClient::new(config.gateway_base_url.clone(), config.gateway_timeout)?;
    let state = AppState {
        config: Arc::new(config),
        gateway: Arc::new(gateway),
    };
    let app = build_router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8087".to_string())
        .parse()?;
    let addr = SocketAddr::new(host.parse()?, port);
    info!("starting payment-service on {addr}");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
