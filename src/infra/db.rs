//! SQLite connection and migrations.

use crate::error::AppError;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// The single process-wide connection. Concurrent commands queue on the mutex.
pub struct DbPool(Mutex<Option<Connection>>);

impl DbPool {
    fn new(conn: Connection) -> Self {
        DbPool(Mutex::new(Some(conn)))
    }

    /// Close the connection. Later calls to [`get_connection`] fail with a connection error.
    pub fn close(&self) -> Result<(), AppError> {
        let mut slot = self
            .0
            .lock()
            .map_err(|_| AppError::Connection("db lock poisoned".into()))?;
        if let Some(conn) = slot.take() {
            conn.close().map_err(|(_, e)| AppError::from(e))?;
            log::info!("DB connection closed");
        }
        Ok(())
    }
}

/// Open DB at path, run migrations, return managed pool.
pub fn init_db(db_path: &Path) -> Result<DbPool, AppError> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AppError::Connection(e.to_string()))?;
    }
    let conn = Connection::open(db_path).map_err(|e| AppError::Connection(e.to_string()))?;
    prepare(conn)
}

/// In-memory database with the full schema, for tests.
pub fn init_test_db() -> DbPool {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    prepare(conn).expect("migrate in-memory db")
}

fn prepare(mut conn: Connection) -> Result<DbPool, AppError> {
    conn.pragma_update(None, "foreign_keys", true)?;
    run_migrations(&mut conn)?;
    Ok(DbPool::new(conn))
}

fn run_migrations(conn: &mut Connection) -> Result<(), AppError> {
    let tx = conn.transaction()?;

    tx.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (version INTEGER PRIMARY KEY, applied_at TEXT NOT NULL DEFAULT (datetime('now')))",
        [],
    )?;

    let applied: Vec<i32> = tx
        .prepare("SELECT version FROM schema_migrations ORDER BY version")?
        .query_map([], |r| r.get(0))?
        .collect::<Result<Vec<_>, _>>()?;

    const MIGRATIONS: &[(i32, &str)] = &[(1, include_str!("../../migrations/0001_init.sql"))];

    for (version, sql) in MIGRATIONS {
        if applied.contains(version) {
            continue;
        }
        // The script's own INSERT INTO schema_migrations is skipped; the runner records it.
        let statements = sql
            .split(';')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty() && !s.contains("INSERT INTO schema_migrations"));
        for stmt in statements {
            tx.execute(stmt, [])?;
        }
        tx.execute(
            "INSERT INTO schema_migrations (version, applied_at) VALUES (?1, datetime('now'))",
            [version],
        )?;
        log::info!("Applied migration {}", version);
    }

    tx.commit()?;
    Ok(())
}

/// Connection guard for the duration of one query.
pub struct ConnGuard<'a>(MutexGuard<'a, Option<Connection>>);

impl std::ops::Deref for ConnGuard<'_> {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        self.0.as_ref().expect("guard holds a live connection")
    }
}

/// Get connection from pool (for use in commands).
pub fn get_connection(pool: &DbPool) -> Result<ConnGuard<'_>, AppError> {
    let guard = pool
        .0
        .lock()
        .map_err(|_| AppError::Connection("db lock poisoned".into()))?;
    if guard.is_none() {
        return Err(AppError::Connection("connection closed".into()));
    }
    Ok(ConnGuard(guard))
}
