mod model;
mod server;

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let dbs = startup::connect_to_databases(&config.database_urls).await?;
    let http_client = startup::setup_reqwest_client()?;
    let neis = startup::setup_neis_client(&config, http_client.clone());
    let identity = startup::setup_identity_verifier(&config, http_client.clone());
    let storage = startup::setup_storage_backend(&config, http_client).await?;

    let app = router::router(storage.local_root())
        .with_state(AppState {
            dbs: dbs.clone(),
            neis,
            identity,
            storage: storage.clone(),
            record_scope: config.record_scope,
            schedule_year: config.schedule_year,
            neis_department: config.neis_department.clone(),
        });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Starting server on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Server stopped, closing database pools");
    dbs.close().await?;

    Ok(())
}
