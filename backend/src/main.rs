//! Backend entry-point: loads settings and fixtures, connects the gateway
//! store and serves the REST API.

mod server;

use std::sync::Arc;

use actix_web::web;
use camino::Utf8PathBuf;
use ortho_config::OrthoConfig as _;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use island_guide::ServerSettings;
use island_guide::inbound::http::health::HealthState;
use island_guide::outbound::fixtures::load_content_store;
use island_guide::outbound::persistence::{DbPool, run_pending_migrations};

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| std::io::Error::other(format!("invalid settings: {err}")))?;

    let fixtures_dir = Utf8PathBuf::try_from(settings.fixtures_dir())
        .map_err(|err| std::io::Error::other(format!("fixtures dir is not UTF-8: {err}")))?;
    let content = load_content_store(&fixtures_dir).map_err(std::io::Error::other)?;

    let (host, port) = settings.bind_address();
    let mut config = ServerConfig::new((host.clone(), port), Arc::new(content));

    match settings.pool_config() {
        Some(pool_config) => {
            info!(database = %pool_config.redacted_url(), "connecting to gateway database");
            if settings.run_migrations() {
                run_pending_migrations(pool_config.database_url())
                    .await
                    .map_err(std::io::Error::other)?;
            }
            let pool = DbPool::new(pool_config)
                .await
                .map_err(std::io::Error::other)?;
            config = config.with_db_pool(pool);
        }
        None => warn!("no database configured; gateway data lives in process memory"),
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%host, port, "listening");
    server.await
}
