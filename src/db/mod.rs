use crate::progress::ProgressStorage;
use rusqlite::{Connection, OptionalExtension, Result};
use std::error::Error;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fixed key under which the serialized progress ledger is stored.
pub const PROGRESS_KEY: &str = "pm-quiz-progress-v1";

fn get_data_dir() -> PathBuf {
    if cfg!(target_os = "macos") || cfg!(target_os = "linux") {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/home/user".to_string());
        PathBuf::from(home).join(".local/share/pm-quiz")
    } else if cfg!(target_os = "windows") {
        let home = std::env::var("USERPROFILE").unwrap_or_else(|_| "C:\\Users\\User".to_string());
        PathBuf::from(home).join(".local\\share\\pm-quiz")
    } else {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/home/user".to_string());
        PathBuf::from(home).join(".local/share/pm-quiz")
    }
}

pub fn get_db_path() -> PathBuf {
    get_data_dir().join("pm-quiz.db")
}

pub fn init_db() -> Result<Connection> {
    let db_path = get_db_path();

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let conn = Connection::open(&db_path)?;

    run_migrations(&conn)?;

    Ok(conn)
}

pub(crate) fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS progress (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at INTEGER NOT NULL
        )",
        [],
    )?;

    Ok(())
}

fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// SQLite-backed progress storage: one row per key in the `progress` table,
/// the value being the JSON blob.
pub struct SqliteStorage {
    conn: Connection,
    key: String,
}

impl SqliteStorage {
    pub fn new(conn: Connection) -> Self {
        Self::with_key(conn, PROGRESS_KEY)
    }

    pub fn with_key(conn: Connection, key: &str) -> Self {
        Self {
            conn,
            key: key.to_string(),
        }
    }
}

impl ProgressStorage for SqliteStorage {
    fn read(&self) -> Option<String> {
        self.conn
            .query_row(
                "SELECT value FROM progress WHERE key = ?",
                [&self.key],
                |row| row.get(0),
            )
            .optional()
            .unwrap_or(None)
    }

    fn write(&mut self, payload: &str) -> Result<(), Box<dyn Error>> {
        self.conn.execute(
            "INSERT INTO progress (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            rusqlite::params![self.key, payload, now()],
        )?;
        Ok(())
    }
}
