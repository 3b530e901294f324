//! Shared helpers for command implementations

use std::path::Path;

use reg_core::Catalog;

use crate::cli::GlobalArgs;

/// Primary environment variable consulted for the connection string.
pub const PRIMARY_URL_VAR: &str = "POSTGRES_URL";

/// Fallback environment variable consulted for the connection string.
pub const FALLBACK_URL_VAR: &str = "DATABASE_URL";

/// Resolve the Postgres connection string: the `--database-url` flag wins,
/// then `POSTGRES_URL`, then `DATABASE_URL`. `None` is a hard precondition
/// failure the caller must surface before any statement executes.
pub fn resolve_database_url(flag: Option<&str>) -> Option<String> {
    pick_database_url(
        flag,
        std::env::var(PRIMARY_URL_VAR).ok(),
        std::env::var(FALLBACK_URL_VAR).ok(),
    )
}

/// Selection logic, separated from the environment for testability.
fn pick_database_url(
    flag: Option<&str>,
    primary: Option<String>,
    fallback: Option<String>,
) -> Option<String> {
    if let Some(url) = flag {
        return Some(url.to_string());
    }
    primary
        .filter(|url| !url.is_empty())
        .or_else(|| fallback.filter(|url| !url.is_empty()))
}

/// Message shown when no connection string could be resolved.
pub fn missing_url_message() -> String {
    format!(
        "Database connection string not found. Pass --database-url or set {} or {}.",
        PRIMARY_URL_VAR, FALLBACK_URL_VAR
    )
}

/// Build the standard catalog rooted at the configured migrations directory.
pub fn build_catalog(global: &GlobalArgs) -> Catalog {
    Catalog::standard(Path::new(&global.migrations_dir))
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
