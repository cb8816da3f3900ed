use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use crate::error::StoreError;
use crate::models::BookmarkEntry;

const SCHEMA_V1: &str = include_str!("../../../migrations/001_bookmarks.sql");

/// SQLite-backed storage for bookmarked creature names.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Open (or create) the database at the given path and run migrations.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        run_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn)?;
        Ok(Self { conn })
    }

    // ── Bookmarks ───────────────────────────────────────────────

    /// All stored bookmarks, oldest first.
    pub fn list_bookmarks(&self) -> Result<Vec<BookmarkEntry>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, created_at FROM bookmark ORDER BY id")?;
        let rows = stmt
            .query_map([], |row| {
                let created: String = row.get(2)?;
                Ok(BookmarkEntry {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    created_at: parse_datetime(&created),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Names of all stored bookmarks, oldest first.
    #[cfg(test)]
    pub fn bookmark_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .list_bookmarks()?
            .into_iter()
            .map(|entry| entry.name)
            .collect())
    }

    /// Number of rows stored under `name`.
    #[cfg(test)]
    pub fn count_bookmarks(&self, name: &str) -> Result<usize, StoreError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM bookmark WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Store `name` unless it is already bookmarked.
    ///
    /// Returns `true` when a new row was written.
    pub fn add_bookmark(&self, name: &str) -> Result<bool, StoreError> {
        let inserted = self.conn.execute(
            "INSERT INTO bookmark (name)
             SELECT ?1 WHERE NOT EXISTS (SELECT 1 FROM bookmark WHERE name = ?1)",
            params![name],
        )?;
        Ok(inserted > 0)
    }

    /// Delete the single bookmark stored under `name`.
    ///
    /// Zero matches or several matches leave the table untouched and return
    /// [`StoreError::Missing`] or [`StoreError::Ambiguous`].
    pub fn remove_bookmark(&self, name: &str) -> Result<(), StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id FROM bookmark WHERE name = ?1")?;
        let ids = stmt
            .query_map(params![name], |row| row.get::<_, i64>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        match ids.as_slice() {
            [] => Err(StoreError::Missing { name: name.into() }),
            [id] => {
                self.conn
                    .execute("DELETE FROM bookmark WHERE id = ?1", params![id])?;
                Ok(())
            }
            _ => Err(StoreError::Ambiguous {
                name: name.into(),
                count: ids.len(),
            }),
        }
    }
}

// ── Migrations ──────────────────────────────────────────────────

/// Run schema migrations using `PRAGMA user_version` for version tracking.
fn run_migrations(conn: &Connection) -> Result<(), StoreError> {
    let version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    if version < 1 {
        conn.execute_batch(SCHEMA_V1)?;
        conn.pragma_update(None, "user_version", 1)?;
    }
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────

/// Parse a datetime string from SQLite (either RFC 3339 or SQLite's `datetime('now')` format).
fn parse_datetime(s: &str) -> DateTime<Utc> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.with_timezone(&Utc);
    }
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return naive.and_utc();
    }
    DateTime::default()
}
