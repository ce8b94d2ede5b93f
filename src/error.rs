//! Stable error codes for frontend.

use rusqlite::ffi;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Db(String),

    #[error("Database unavailable: {0}")]
    Connection(String),

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Failed to fetch partners")]
    FetchFailed,
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Db(_) => "DB_ERROR",
            Self::Connection(_) => "CONNECTION_ERROR",
            Self::UniqueViolation(_) => "UNIQUE_VIOLATION",
            Self::ForeignKeyViolation(_) => "FOREIGN_KEY_VIOLATION",
            Self::NotFound(_) => "NOT_FOUND",
            Self::FetchFailed => "FETCH_FAILED",
        }
    }

    pub fn to_serde(&self) -> AppErrorDto {
        AppErrorDto {
            code: self.code().to_string(),
            message: self.to_string(),
            details: None,
        }
    }
}

/// SQLite failures are classified here and nowhere else.
impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        match &e {
            rusqlite::Error::SqliteFailure(err, _) => match err.extended_code {
                ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                    AppError::UniqueViolation(e.to_string())
                }
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => AppError::ForeignKeyViolation(e.to_string()),
                _ => match err.code {
                    ffi::ErrorCode::CannotOpen
                    | ffi::ErrorCode::NotADatabase
                    | ffi::ErrorCode::DatabaseCorrupt
                    | ffi::ErrorCode::SystemIoFailure => AppError::Connection(e.to_string()),
                    _ => AppError::Db(e.to_string()),
                },
            },
            rusqlite::Error::QueryReturnedNoRows => AppError::NotFound(e.to_string()),
            _ => AppError::Db(e.to_string()),
        }
    }
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_serde().serialize(serializer)
    }
}

#[derive(Debug, Serialize)]
pub struct AppErrorDto {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
