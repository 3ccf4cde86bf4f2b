use sqlx::{Sqlite, SqlitePool, Transaction};

use camp_infra::StoreError;

/// Shared handles for handlers. Holds no per-request state.
#[derive(Debug, Clone)]
pub struct AppServices {
    pool: SqlitePool,
}

impl AppServices {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Start the unit of work for one request.
    ///
    /// Commit it explicitly; dropping it rolls back.
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>, StoreError> {
        Ok(self.pool.begin().await?)
    }
}
