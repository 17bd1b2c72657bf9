//! Database migrations

use crate::error::Result;
use libsql::Connection;

/// Current schema version
const CURRENT_VERSION: i32 = 2;

/// Run all pending migrations
pub async fn run(conn: &Connection) -> Result<()> {
    let version = get_version(conn).await?;

    if version < 1 {
        migrate_v1(conn).await?;
    }
    if version < 2 {
        migrate_v2(conn).await?;
    }

    Ok(())
}

/// Highest applied schema version, 0 for a fresh database
async fn get_version(conn: &Connection) -> Result<i32> {
    let has_table = first_int(
        conn,
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'schema_version'",
    )
    .await?
    .is_some_and(|count| count > 0);

    if !has_table {
        return Ok(0);
    }
    Ok(first_int(conn, "SELECT MAX(version) FROM schema_version")
        .await?
        .unwrap_or(0))
}

/// First column of the first row, `None` for no rows or a NULL.
async fn first_int(conn: &Connection, sql: &str) -> Result<Option<i32>> {
    let mut rows = conn.query(sql, ()).await?;
    match rows.next().await? {
        Some(row) => Ok(row.get::<Option<i32>>(0)?),
        None => Ok(None),
    }
}

/// Migration to version 1: key/value property table
async fn migrate_v1(conn: &Connection) -> Result<()> {
    let statements = [
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        )",
        "CREATE TABLE IF NOT EXISTS properties (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        "INSERT INTO schema_version (version) VALUES (1)",
    ];

    apply(conn, &statements).await?;
    tracing::info!("Migrated database to version 1");
    Ok(())
}

/// Migration to version 2: track when each property was last written
async fn migrate_v2(conn: &Connection) -> Result<()> {
    let statements = [
        "ALTER TABLE properties ADD COLUMN updated_at INTEGER NOT NULL DEFAULT 0",
        "INSERT INTO schema_version (version) VALUES (2)",
    ];

    apply(conn, &statements).await?;
    tracing::info!("Migrated database to version {CURRENT_VERSION}");
    Ok(())
}

/// Run `statements` inside one transaction, rolling back on the first failure.
async fn apply(conn: &Connection, statements: &[&str]) -> Result<()> {
    // libsql doesn't have execute_batch, so we run each statement separately
    conn.execute("BEGIN TRANSACTION", ()).await?;

    for stmt in statements {
        if let Err(e) = conn.execute(stmt, ()).await {
            conn.execute("ROLLBACK", ()).await.ok();
            return Err(e.into());
        }
    }

    if let Err(e) = conn.execute("COMMIT", ()).await {
        conn.execute("ROLLBACK", ()).await.ok();
        return Err(e.into());
    }

    Ok(())
}
