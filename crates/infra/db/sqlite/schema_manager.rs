use anyhow::{Result, anyhow};
use diesel::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use super::sqlite_connection::SqlitePoolSquad;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// Creates the `places` table when it is missing. Safe to call on every start:
/// applied migrations are skipped and the DDL itself is `IF NOT EXISTS`.
pub fn ensure_places_schema(db_pool: &SqlitePoolSquad) -> Result<()> {
    let mut pooled = db_pool.get()?;
    let conn: &mut SqliteConnection = &mut pooled;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow!("failed to apply places schema: {err}"))?;

    if applied.is_empty() {
        info!("schema_manager: places schema already up to date");
    } else {
        info!(
            applied = applied.len(),
            "schema_manager: places schema migrations applied"
        );
    }

    Ok(())
}
