use thiserror::Error;

/// Failure while talking to the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A signup referenced a camper or activity that does not exist.
    #[error("{0}")]
    ForeignKey(String),

    #[error(transparent)]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.is_foreign_key_violation() {
                return Self::ForeignKey(db.message().to_string());
            }
        }
        Self::Database(err)
    }
}
