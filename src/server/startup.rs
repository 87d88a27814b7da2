//! Initialization of databases, HTTP clients and integrations.

use std::{collections::HashMap, sync::Arc, time::Duration};

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{
    config::{Config, DatabaseUrls, StorageConfig},
    error::AppError,
    service::{
        identity::{IdentityVerifier, TokenInfoVerifier},
        neis::{HttpNeisClient, NeisApi},
    },
    state::Databases,
    storage::{local::LocalStorage, object::ObjectStorage, StorageBackend},
};

const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Connects to every logical database and runs pending migrations.
///
/// Logical databases configured with the same URL share one pool. Migrations run
/// once per distinct URL holding student records; a separate directory database is
/// only read and left as-is.
///
/// # Arguments
/// - `urls` - Connection URLs of the logical databases
///
/// # Returns
/// - `Ok(Databases)` - Connected pools with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect or migrate
pub async fn connect_to_databases(urls: &DatabaseUrls) -> Result<Databases, AppError> {
    let mut pools: HashMap<&str, DatabaseConnection> = HashMap::new();

    for url in [&urls.student, &urls.personal, &urls.diary, &urls.image] {
        if pools.contains_key(url.as_str()) {
            continue;
        }
        let db = connect(url).await?;
        Migrator::up(&db, None).await?;
        pools.insert(url.as_str(), db);
    }
    if !pools.contains_key(urls.directory.as_str()) {
        let db = connect(&urls.directory).await?;
        pools.insert(urls.directory.as_str(), db);
    }

    tracing::info!("Opened {} database pool(s)", pools.len());

    let pool = |url: &String| {
        pools
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| AppError::InternalError(format!("No pool for {}", url)))
    };

    Ok(Databases {
        student: pool(&urls.student)?,
        personal: pool(&urls.personal)?,
        diary: pool(&urls.diary)?,
        image: pool(&urls.image)?,
        directory: pool(&urls.directory)?,
    })
}

async fn connect(url: &str) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(url);
    opt.sqlx_logging(false);

    Ok(Database::connect(opt).await?)
}

/// Builds the HTTP client shared by outbound integrations.
///
/// Redirects are disabled and every request is bounded by a timeout.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}

pub fn setup_neis_client(config: &Config, client: reqwest::Client) -> Arc<dyn NeisApi> {
    Arc::new(HttpNeisClient::new(
        client,
        &config.neis_base_url,
        config.neis_api_key.clone(),
    ))
}

pub fn setup_identity_verifier(
    config: &Config,
    client: reqwest::Client,
) -> Arc<dyn IdentityVerifier> {
    Arc::new(TokenInfoVerifier::new(
        client,
        config.identity_tokeninfo_url.clone(),
        config.identity_audience.clone(),
    ))
}

/// Creates the configured storage backend.
///
/// The local backend creates its upload folders up front so they can be served
/// before the first upload.
pub async fn setup_storage_backend(
    config: &Config,
    client: reqwest::Client,
) -> Result<Arc<dyn StorageBackend>, AppError> {
    match &config.storage {
        StorageConfig::Local { root } => {
            for folder in crate::server::storage::UploadFolder::ALL {
                tokio::fs::create_dir_all(root.join(folder.as_str())).await?;
            }
            tracing::info!("Storing uploads below {}", root.display());
            Ok(Arc::new(LocalStorage::new(root.clone())))
        }
        StorageConfig::Object {
            endpoint,
            bucket,
            token,
            public_url,
        } => {
            tracing::info!("Storing uploads in bucket {} at {}", bucket, endpoint);
            Ok(Arc::new(ObjectStorage::new(
                client,
                endpoint,
                bucket,
                token.clone(),
                public_url.clone(),
            )))
        }
    }
}

/// Resolves when the process receives Ctrl+C or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
