use super::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "taskbox.db";

/// An open SQLite connection with the schema up to date.
///
/// Foreign keys are switched on for every connection; section deletion relies
/// on `ON DELETE CASCADE` to drop the section's tasks.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database configured for the current user.
    pub fn new() -> Result<Db> {
        let storage = DataStorage::new();
        let path = Config::read_from(&storage)?.database_path(&storage)?;
        Self::open(path)
    }

    /// Opens (creating if needed) the database at `path` and applies pending migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        let mut conn = Self::open_without_migrations(path)?;
        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }

    /// Opens a raw connection without touching the schema.
    pub fn open_without_migrations(path: impl AsRef<Path>) -> Result<Connection> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(conn)
    }
}
