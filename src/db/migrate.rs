use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
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

/// Check if the `kv` table exists.
fn kv_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='kv'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `kv` table. All record collections live here as one JSON
/// blob per key.
fn create_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// One-off migration: older databases stored kv rows without an
/// `updated_at` column.
fn migrate_add_updated_at_column(conn: &Connection) -> Result<()> {
    let version = "20250614_0001_add_kv_updated_at";

    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(()); // already applied
    }

    let mut cols = conn.prepare("PRAGMA table_info('kv')")?;
    let names = cols.query_map([], |row| row.get::<_, String>(1))?;
    let mut has_column = false;
    for name in names {
        if name? == "updated_at" {
            has_column = true;
            break;
        }
    }

    if !has_column {
        conn.execute(
            "ALTER TABLE kv ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
            [],
        )?;
        success(format!(
            "Migration applied: {} → added 'updated_at' to kv table",
            version
        ));
    }

    // record the version marker either way
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added updated_at to kv')",
        [version],
    )?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table (migrations record themselves in it)
    ensure_log_table(conn)?;

    // 2) Create or upgrade the kv table
    if !kv_table_exists(conn)? {
        create_kv_table(conn)?;
        success("Created kv table (modern schema).");
    } else {
        migrate_add_updated_at_column(conn)?;
    }

    Ok(())
}
