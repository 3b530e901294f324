//! Database trait definition

use crate::error::DbResult;
use async_trait::async_trait;

/// Database abstraction trait for Registrar
///
/// The execution engine takes this as an explicit constructor dependency so
/// it can be exercised against a mock in tests. Implementations must be
/// Send + Sync for async operation.
#[async_trait]
pub trait Database: Send + Sync {
    /// Execute one SQL statement, returning the number of affected rows.
    async fn execute(&self, sql: &str) -> DbResult<u64>;

    /// Backend identifier for logging
    fn backend_name(&self) -> &'static str;
}
