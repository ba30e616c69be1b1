pub mod axum_http;
pub mod config;
pub mod usecases;

use std::{sync::Arc, time::Duration};

use anyhow::Result;
use nestor_core::infra::db::sqlite::{schema_manager, sqlite_connection};
use tracing::info;

pub async fn run() -> Result<()> {
    let dotenvy_env = config::config_loader::load()?;
    info!("ENV has been loaded");

    let sqlite_pool = sqlite_connection::establish_connection(
        &dotenvy_env.database.url,
        dotenvy_env.database.max_connections,
        Duration::from_millis(dotenvy_env.database.busy_timeout_ms),
    )?;
    info!(
        database_url = %dotenvy_env.database.url,
        "SQLite connection pool has been established"
    );

    schema_manager::ensure_places_schema(&sqlite_pool)?;

    axum_http::http_serve::start(Arc::new(dotenvy_env), Arc::new(sqlite_pool)).await?;

    Ok(())
}
