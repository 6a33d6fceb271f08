#![cfg(test)]
//! Postgres access for the repository tests.

use std::time::Duration;

use models::db::{self as store, connect_with_config, DatabaseConfig};
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

/// Outcome of the one schema migration shared by every test in the process.
static SCHEMA: OnceCell<Result<(), String>> = OnceCell::const_new();

/// `None` when `SKIP_DB_TESTS` is set or no `DATABASE_URL` is configured.
fn test_config() -> Option<DatabaseConfig> {
    if std::env::var_os("SKIP_DB_TESTS").is_some() {
        return None;
    }
    std::env::var("DATABASE_URL").ok()?;
    let mut cfg = DatabaseConfig::from_env();
    cfg.acquire_timeout = Duration::from_secs(10);
    Some(cfg)
}

/// Connection for DB-backed tests, or `None` when the tests should be skipped.
/// Missing tables are created once; nothing is reset, since tests run in
/// parallel. Connection and migration failures are returned, not skipped.
pub async fn get_db() -> anyhow::Result<Option<DatabaseConnection>> {
    let Some(cfg) = test_config() else {
        eprintln!("skip: DATABASE_URL missing or SKIP_DB_TESTS set");
        return Ok(None);
    };

    let schema = SCHEMA
        .get_or_init(|| async {
            let db = connect_with_config(&cfg).await.map_err(|e| e.to_string())?;
            let migrated = store::migrate(&db).await.map_err(|e| e.to_string());
            let _ = db.close().await;
            migrated
        })
        .await;
    if let Err(e) = schema {
        anyhow::bail!("preparing test database: {e}");
    }

    // Each test gets its own connection, bound to its own runtime
    Ok(Some(connect_with_config(&cfg).await?))
}
