//! Product service binary: Postgres-backed gRPC server.

use market_app::{config::BackendConfig, telemetry};
use market_proto::product::v1::product_service_server::ProductServiceServer;
use market_repo::PgProductRepository;
use market_services::{ProductService, grpc::ProductGrpc};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init("info,product_service=debug,market_services=debug");

    let config = BackendConfig::from_env("PRODUCT_SERVICE_PORT", 50052)?;

    let pool = market_repo::connect(&config.database_url).await?;
    let repo = PgProductRepository::new(pool);
    let service = ProductService::new(repo, config.storage_timeout);

    let addr = format!("0.0.0.0:{}", config.port).parse()?;
    tracing::info!("product service listening on {addr}");

    tonic::transport::Server::builder()
        .add_service(ProductServiceServer::new(ProductGrpc::new(service)))
        .serve(addr)
        .await?;

    Ok(())
}
