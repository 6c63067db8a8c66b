//! Versioned schema migrations.
//!
//! Applied migrations are recorded in a `migrations` table. Opening a
//! [`Db`](super::db::Db) runs whatever is pending, all inside one transaction,
//! so a failed migration leaves the schema untouched.
//!
//! ```rust,no_run
//! use taskbox::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("taskbox.db")?;
//! init_with_migrations(&mut conn)?;
//! assert!(get_db_version(&conn)? > 0);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";
const HAS_MIGRATIONS_TABLE: &str = "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'migrations')";
const RECORD_MIGRATION: &str = "INSERT INTO migrations (version, name) VALUES (?1, ?2)";
const SELECT_HISTORY: &str = "SELECT version, name, applied_at FROM migrations ORDER BY version";

/// One row of the `migrations` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMigration {
    pub version: u32,
    pub name: String,
    /// SQLite `CURRENT_TIMESTAMP` text, UTC.
    pub applied_at: String,
}

#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of every schema migration, in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    /// A manager with every known migration registered.
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: sections own tasks; deleting a section drops its tasks
        self.add_migration(1, "create_sections_and_tasks", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS sections (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL UNIQUE
                )",
                [],
            )?;
            tx.execute(
                "CREATE TABLE IF NOT EXISTS tasks (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL,
                    priority TEXT NOT NULL,
                    due_date DATE NOT NULL,
                    section_id INTEGER NOT NULL REFERENCES sections(id) ON DELETE CASCADE
                )",
                [],
            )?;
            Ok(())
        });

        // Version 2: lookups of a section's tasks and of tasks by name
        self.add_migration(2, "add_task_indices", |tx| {
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_section_id ON tasks(section_id)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_section_name ON tasks(section_id, name)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the current schema version.
    ///
    /// Pending migrations run in ascending order inside one transaction; the
    /// first failure rolls all of them back.
    ///
    /// # Arguments
    ///
    /// * `conn` - Connection to migrate; needs `&mut` to open the transaction
    ///
    /// # Returns
    ///
    /// `Ok(())` when the schema is at [`latest_version`](Self::latest_version).
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.pending_after(current).collect();
        if pending.is_empty() {
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));
        let tx = conn.transaction()?;
        for migration in pending {
            Self::apply(&tx, migration)?;
        }
        tx.commit()?;
        msg_debug!(Message::AllMigrationsCompleted);

        Ok(())
    }

    fn pending_after(&self, version: u32) -> impl Iterator<Item = &Migration> {
        self.migrations.iter().filter(move |m| m.version > version)
    }

    /// Runs one migration and records it. Dropping `tx` on error rolls back.
    fn apply(tx: &Transaction, migration: &Migration) -> Result<()> {
        msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

        (migration.up)(tx)
            .and_then(|()| {
                tx.execute(RECORD_MIGRATION, params![migration.version, migration.name])?;
                Ok(())
            })
            .inspect_err(|e| {
                msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
            })?;

        msg_debug!(Message::MigrationCompleted(migration.version));
        Ok(())
    }

    /// Highest applied version, `0` for a database that was never migrated.
    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let tracked: bool = conn.query_row(HAS_MIGRATIONS_TABLE, [], |row| row.get(0))?;
        if !tracked {
            return Ok(0);
        }

        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
        Ok(version.unwrap_or(0))
    }

    /// Highest registered migration version.
    pub fn latest_version(&self) -> u32 {
        self.migrations.iter().map(|m| m.version).max().unwrap_or(0)
    }

    /// Lists applied migrations, oldest first.
    ///
    /// # Arguments
    ///
    /// * `conn` - Connection whose `migrations` table is read
    ///
    /// # Returns
    ///
    /// One [`AppliedMigration`] per recorded version; empty for an untracked database.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<AppliedMigration>> {
        if self.get_current_version(conn)? == 0 {
            return Ok(Vec::new());
        }

        let mut stmt = conn.prepare(SELECT_HISTORY)?;
        let history = stmt
            .query_map([], |row| {
                Ok(AppliedMigration {
                    version: row.get(0)?,
                    name: row.get(1)?,
                    applied_at: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Brings `conn` to the latest schema. Called by [`Db::open`](super::db::Db::open).
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

/// Schema version of `conn`; `0` before the first migration.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}

/// Whether `conn` is behind the latest registered migration.
pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(manager.get_current_version(conn)? < manager.latest_version())
}
