//! reg-core - Core library for Registrar
//!
//! This crate provides the migration catalog, the statement splitter, the
//! run report types, and the embedded schema/seed SQL shared by the runner
//! and both invocation surfaces.

pub mod catalog;
pub mod error;
pub mod report;
pub mod splitter;

pub use catalog::{Catalog, MigrationUnit, Phase, UnitSource, CREATE_TABLES_SQL, SEED_DATA_SQL};
pub use error::{CoreError, CoreResult};
pub use report::{RunReport, RunSummary, UnitResult};
pub use splitter::split_statements;
