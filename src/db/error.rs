use rusqlite::ErrorCode;
use thiserror::Error;

/// Everything that can go wrong inside the SQLite store.
///
/// These never leave [`SqliteStore`](super::store::SqliteStore): its
/// repository methods log them and report plain failure instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database unavailable: {0}")]
    Connection(String),

    #[error("constraint violated: {0}")]
    Constraint(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("malformed row {id}: {reason}")]
    Malformed { id: i64, reason: String },

    #[error(transparent)]
    Sqlite(rusqlite::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(e, msg) if e.code == ErrorCode::ConstraintViolation => {
                StoreError::Constraint(msg.unwrap_or_else(|| e.to_string()))
            }
            rusqlite::Error::SqliteFailure(e, msg) if matches!(e.code, ErrorCode::CannotOpen | ErrorCode::NotADatabase) => {
                StoreError::Connection(msg.unwrap_or_else(|| e.to_string()))
            }
            other => StoreError::Sqlite(other),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
