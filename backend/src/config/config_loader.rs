use anyhow::{Context, Result};
use std::{env, str::FromStr};

use super::config_model::{BackendServer, Database, DotEnvyConfig};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    load_from(|key| env::var(key).ok())
}

pub fn load_from<F>(lookup: F) -> Result<DotEnvyConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let backend_server = BackendServer {
        port: parse_or(&lookup, "SERVER_PORT", 4000)?,
        body_limit: parse_or(&lookup, "SERVER_BODY_LIMIT", 1)?,
        timeout: parse_or(&lookup, "SERVER_TIMEOUT", 30)?,
    };

    let database = Database {
        url: lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| "nestor.db".to_string()),
        max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 8)?,
        busy_timeout_ms: parse_or(&lookup, "DATABASE_BUSY_TIMEOUT_MS", 5000)?,
        query_timeout: parse_or(&lookup, "DATABASE_QUERY_TIMEOUT", 10)?,
    };

    Ok(DotEnvyConfig {
        backend_server,
        database,
    })
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} is invalid")),
        _ => Ok(default),
    }
}
