//! Versioned schema migrations.
//!
//! Applied versions are recorded in the `log` table as
//! `operation = 'migration_applied'`, `target = <version>`.

use rusqlite::{Connection, OptionalExtension, Result};
use tracing::info;

/// Ensure that the `log` table exists. It must precede every migration since
/// it is where migrations are recorded.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20251201_0001_create_local_storage",
        description: "Created local_storage table (session keys)",
        sql: r#"
        CREATE TABLE IF NOT EXISTS local_storage (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20251201_0002_create_scan_journal",
        description: "Created scan_journal table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS scan_journal (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            qr_token    TEXT NOT NULL,
            participant TEXT NOT NULL DEFAULT '',
            day         INTEGER CHECK(day IS NULL OR day IN (1, 2)),
            meal_type   TEXT CHECK(meal_type IS NULL OR meal_type IN ('breakfast','lunch','hitea')),
            outcome     TEXT NOT NULL CHECK(outcome IN ('claimed','duplicate','rejected','lookup_failed')),
            message     TEXT NOT NULL DEFAULT ''
        );
        "#,
    },
    Migration {
        version: "20251208_0003_index_scan_journal",
        description: "Added date/token indexes to scan_journal",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_scan_journal_date ON scan_journal(date);
        CREATE INDEX IF NOT EXISTS idx_scan_journal_token ON scan_journal(qr_token);
        "#,
    },
];

/// Public entry point: run all pending migrations.
///
/// Called by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        conn.execute_batch(m.sql)?;
        mark_applied(conn, m.version, m.description)?;
        info!(version = m.version, "migration applied: {}", m.description);
    }

    Ok(())
}

/// Versions already applied, oldest first.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}
