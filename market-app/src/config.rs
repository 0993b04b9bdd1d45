//! Configuration loading from environment.

use std::env;
use std::time::Duration;

const DEFAULT_TIMEOUT_MS: u64 = 1_000;

/// Configuration for one of the gRPC backends.
pub struct BackendConfig {
    pub port: u16,
    pub database_url: String,
    /// Deadline applied to each storage call.
    pub storage_timeout: Duration,
}

impl BackendConfig {
    /// Loads configuration from environment variables. `port_var` names the
    /// service-specific port variable so both backends can share a `.env`.
    pub fn from_env(port_var: &str, default_port: u16) -> anyhow::Result<Self> {
        let port = env::var(port_var)
            .unwrap_or_else(|_| default_port.to_string())
            .parse()?;

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let storage_timeout = duration_from_env("STORAGE_TIMEOUT_MS")?;

        Ok(Self {
            port,
            database_url,
            storage_timeout,
        })
    }
}

/// Configuration for the HTTP gateway.
pub struct GatewayConfig {
    pub port: u16,
    pub user_service_url: String,
    pub product_service_url: String,
    pub identity_verify_url: String,
    /// Deadline applied to each backend RPC.
    pub rpc_timeout: Duration,
}

impl GatewayConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("GATEWAY_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let user_service_url = env::var("USER_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:50051".to_string());
        let product_service_url = env::var("PRODUCT_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:50052".to_string());

        let identity_verify_url = env::var("IDENTITY_VERIFY_URL")
            .map_err(|_| anyhow::anyhow!("IDENTITY_VERIFY_URL environment variable is required"))?;

        let rpc_timeout = duration_from_env("RPC_TIMEOUT_MS")?;

        Ok(Self {
            port,
            user_service_url,
            product_service_url,
            identity_verify_url,
            rpc_timeout,
        })
    }
}

fn duration_from_env(var: &str) -> anyhow::Result<Duration> {
    let millis = match env::var(var) {
        Ok(raw) => raw.parse()?,
        Err(_) => DEFAULT_TIMEOUT_MS,
    };
    Ok(Duration::from_millis(millis))
}
