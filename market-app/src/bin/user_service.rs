//! User service binary: Postgres-backed gRPC server.

use market_app::{config::BackendConfig, telemetry};
use market_proto::user::v1::user_service_server::UserServiceServer;
use market_repo::PgUserRepository;
use market_services::{UserService, grpc::UserGrpc};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init("info,user_service=debug,market_services=debug");

    let config = BackendConfig::from_env("USER_SERVICE_PORT", 50051)?;

    let pool = market_repo::connect(&config.database_url).await?;
    let repo = PgUserRepository::new(pool);
    let service = UserService::new(repo, config.storage_timeout);

    let addr = format!("0.0.0.0:{}", config.port).parse()?;
    tracing::info!("user service listening on {addr}");

    tonic::transport::Server::builder()
        .add_service(UserServiceServer::new(UserGrpc::new(service)))
        .serve(addr)
        .await?;

    Ok(())
}
