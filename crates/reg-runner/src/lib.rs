//! reg-runner - Execution engine for Registrar
//!
//! Walks the migration catalog in sequence order, routes failures through
//! the error classifier, and produces a run report.

pub mod classify;
pub mod runner;

pub use classify::{classify, ErrorClass};
pub use runner::Runner;
