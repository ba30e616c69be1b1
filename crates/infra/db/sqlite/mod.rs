pub mod schema;
pub mod schema_manager;
pub mod sqlite_connection;
