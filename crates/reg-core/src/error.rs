//! Error types for reg-core

use thiserror::Error;

/// Core error type for Registrar
#[derive(Error, Debug)]
pub enum CoreError {
    /// C001: Required migration unit source is missing
    #[error("[C001] Migration unit '{unit}' source not found: {path}")]
    UnitSourceMissing { unit: String, path: String },

    /// C002: Failed to read a migration unit source file
    #[error("[C002] Failed to read source for unit '{unit}': {source}")]
    UnitSourceRead {
        unit: String,
        #[source]
        source: std::io::Error,
    },

    /// C003: Migration unit source is empty after trimming
    #[error("[C003] Migration unit '{unit}' source is empty")]
    UnitSourceEmpty { unit: String },

    /// C004: Duplicate sequence position in the catalog
    #[error("[C004] Duplicate sequence position {sequence} in catalog ('{first}' and '{second}')")]
    DuplicateSequence {
        sequence: u32,
        first: String,
        second: String,
    },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
