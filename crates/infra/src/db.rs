//! SQLite pool construction and schema bootstrap.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::{DatabaseConfig, StoreError};

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS activities (
        id         INTEGER PRIMARY KEY,
        name       TEXT    NOT NULL,
        difficulty INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS campers (
        id   INTEGER PRIMARY KEY,
        name TEXT    NOT NULL,
        age  INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS signups (
        id          INTEGER PRIMARY KEY,
        time        INTEGER NOT NULL,
        camper_id   INTEGER NOT NULL
            CONSTRAINT fk_signups_camper_id_campers REFERENCES campers (id) ON DELETE CASCADE,
        activity_id INTEGER NOT NULL
            CONSTRAINT fk_signups_activity_id_activities REFERENCES activities (id) ON DELETE CASCADE
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_signups_camper_id ON signups (camper_id)",
    "CREATE INDEX IF NOT EXISTS ix_signups_activity_id ON signups (activity_id)",
];

/// Open a pool for `config`.
///
/// Foreign keys are switched on for every connection. An in-memory database
/// lives only as long as its connection, so it gets exactly one that is never
/// recycled.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, StoreError> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if config.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };

    let pool = pool_options.connect_with(options).await?;
    tracing::debug!(url = %config.url, "sqlite pool ready");
    Ok(pool)
}

/// Create the three tables if they are missing. Safe to run on every start.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), StoreError> {
    let mut tx = pool.begin().await?;
    for statement in SCHEMA {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    Ok(())
}

/// `connect` followed by `ensure_schema`.
pub async fn open(config: &DatabaseConfig) -> Result<SqlitePool, StoreError> {
    let pool = connect(config).await?;
    ensure_schema(&pool).await?;
    Ok(pool)
}
