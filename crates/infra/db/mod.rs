pub mod repositories;
pub mod sqlite;
