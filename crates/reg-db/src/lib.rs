//! reg-db - Database abstraction layer for Registrar
//!
//! This crate provides the `Database` trait and the Postgres implementation
//! used by the migration runner.

pub mod error;
pub mod postgres;
pub mod traits;

pub use error::{DbError, DbResult};
pub use postgres::PgBackend;
pub use traits::Database;
