use super::error::StoreResult;
use rusqlite::{params, Connection, OptionalExtension};

const INSERT_SECTION: &str = "INSERT OR IGNORE INTO sections (name) VALUES (?1)";
const SELECT_SECTIONS: &str = "SELECT id, name FROM sections ORDER BY id ASC";
const SELECT_SECTION_ID: &str = "SELECT id FROM sections WHERE name = ?1";
const DELETE_SECTION: &str = "DELETE FROM sections WHERE name = ?1";

/// Row-level access to the `sections` table over a borrowed connection.
pub struct Sections<'a> {
    conn: &'a Connection,
}

impl<'a> Sections<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Sections { conn }
    }

    /// Inserts `name` unless it exists. Returns the new id, or `None` for a duplicate.
    pub fn insert(&self, name: &str) -> StoreResult<Option<i64>> {
        let affected = self.conn.execute(INSERT_SECTION, params![name])?;
        if affected == 0 {
            return Ok(None);
        }
        Ok(Some(self.conn.last_insert_rowid()))
    }

    /// `(id, name)` pairs in insertion order.
    pub fn fetch_all(&self) -> StoreResult<Vec<(i64, String)>> {
        let mut stmt = self.conn.prepare(SELECT_SECTIONS)?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Row id of the section called `name`, or `None` if there is no such section.
    pub fn id_by_name(&self, name: &str) -> StoreResult<Option<i64>> {
        let id = self.conn.query_row(SELECT_SECTION_ID, params![name], |row| row.get(0)).optional()?;
        Ok(id)
    }

    /// Deletes the section; its tasks go with it through the foreign key cascade.
    pub fn delete(&self, name: &str) -> StoreResult<usize> {
        Ok(self.conn.execute(DELETE_SECTION, params![name])?)
    }
}
