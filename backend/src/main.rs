//! Service entry-point: loads settings, prepares the database and serves the
//! users API.

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, run_migrations};
use backend::server::{ServerConfig, create_server};
use backend::settings::AppSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let bind_addr = settings.bind_addr()?;
    let database_url = settings.database_url().to_owned();

    run_migrations(&database_url)
        .await
        .wrap_err_with(|| format!("failed to migrate database {database_url}"))?;
    let pool = DbPool::new(settings.pool_config())
        .await
        .wrap_err("failed to build database pool")?;
    info!(database = %database_url, "database ready");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), ServerConfig::new(bind_addr, pool))
        .wrap_err_with(|| format!("failed to bind {bind_addr}"))?;

    let result = server.await;
    health_state.mark_unhealthy();
    result.wrap_err("server terminated with an error")
}
