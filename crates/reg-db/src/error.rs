//! Error types for reg-db

use thiserror::Error;

/// Database operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    Connection(String),

    /// Statement execution error (D002)
    ///
    /// Carries the SQLSTATE code when the server reported one so callers can
    /// classify the failure without parsing the message.
    #[error("[D002] SQL execution failed{}: {message}", code_suffix(.code))]
    Execution {
        code: Option<String>,
        message: String,
    },
}

fn code_suffix(code: &Option<String>) -> String {
    match code {
        Some(code) => format!(" ({})", code),
        None => String::new(),
    }
}

impl DbError {
    /// SQLSTATE code reported by the server, when available.
    pub fn code(&self) -> Option<&str> {
        match self {
            DbError::Execution { code, .. } => code.as_deref(),
            DbError::Connection(_) => None,
        }
    }

    /// Raw error message.
    pub fn message(&self) -> &str {
        match self {
            DbError::Execution { message, .. } => message,
            DbError::Connection(message) => message,
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::Execution {
                code: db_err.code().map(|c| c.to_string()),
                message: db_err.message().to_string(),
            },
            // Pool/protocol/io failures have no SQLSTATE
            other => DbError::Execution {
                code: None,
                message: other.to_string(),
            },
        }
    }
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
