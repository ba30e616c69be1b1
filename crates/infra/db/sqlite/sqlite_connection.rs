use anyhow::Result;
use diesel::{
    SqliteConnection,
    connection::SimpleConnection,
    r2d2::{ConnectionManager, CustomizeConnection, Error as R2d2Error, Pool},
};
use std::time::Duration;

/// Applied to every connection the pool hands out.
#[derive(Debug)]
struct SqlitePragmas {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, R2d2Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> std::result::Result<(), R2d2Error> {
        // Writers wait on the file lock instead of failing with SQLITE_BUSY.
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {}; PRAGMA journal_mode = WAL;",
            self.busy_timeout.as_millis()
        ))
        .map_err(R2d2Error::QueryError)
    }
}

pub type SqlitePoolSquad = Pool<ConnectionManager<SqliteConnection>>;

pub fn establish_connection(
    database_url: &str,
    max_connections: u32,
    busy_timeout: Duration,
) -> Result<SqlitePoolSquad> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(max_connections)
        .connection_timeout(busy_timeout)
        .connection_customizer(Box::new(SqlitePragmas { busy_timeout }))
        .build(manager)?;
    Ok(pool)
}
