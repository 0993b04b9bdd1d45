//! Gateway binary: HTTP front door over the two gRPC backends.

use std::sync::Arc;

use market_app::{config::GatewayConfig, telemetry};
use market_client::{ProductClient, UserClient};
use market_gateway::{GatewayServer, HttpTokenVerifier};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init("info,gateway=debug,market_gateway=debug");

    let config = GatewayConfig::from_env()?;

    // Lazy channels: the gateway starts even if a backend is still coming up.
    let users = UserClient::connect_lazy(&config.user_service_url, config.rpc_timeout)?;
    let products = ProductClient::connect_lazy(&config.product_service_url, config.rpc_timeout)?;
    let verifier = Arc::new(HttpTokenVerifier::new(config.identity_verify_url));

    let server = GatewayServer::new(users, products, verifier);
    server.run(&format!("0.0.0.0:{}", config.port)).await
}
