//! Execution engine: walks the catalog in order and applies each unit
//!
//! Execution is strictly sequential over a single connection. The abort
//! policy differs by phase: a fatal error while creating the schema halts
//! the run immediately because everything downstream depends on it, while
//! seed and incremental statements are largely independent and a fatal
//! failure there is recorded without stopping the run.

use std::sync::Arc;

use reg_core::catalog::{Catalog, Phase};
use reg_core::report::{RunReport, UnitResult};
use reg_core::splitter::split_statements;
use reg_db::Database;

use crate::classify::{classify, ErrorClass};

/// Phased migration runner.
///
/// The database handle is an explicit constructor dependency so tests can
/// run the engine against a mock instead of a live server.
pub struct Runner {
    db: Arc<dyn Database>,
    catalog: Catalog,
}

impl Runner {
    pub fn new(db: Arc<dyn Database>, catalog: Catalog) -> Self {
        Self { db, catalog }
    }

    /// Execute the full catalog and produce a report.
    ///
    /// Always returns a report, aborted or not; callers decide how partial
    /// success is presented.
    pub async fn run(&self) -> RunReport {
        let mut report = RunReport::new();

        // Precondition: every unit source must be resolvable before the
        // first statement executes. Absent optional sources become skips.
        let mut sources: Vec<Option<String>> = Vec::with_capacity(self.catalog.len());
        for unit in self.catalog.units() {
            match unit.load() {
                Ok(text) => sources.push(text),
                Err(e) => {
                    log::warn!("unit '{}' failed precondition: {}", unit.name, e);
                    report.abort(e.to_string());
                    return report;
                }
            }
        }

        for (unit, source) in self.catalog.units().iter().zip(sources) {
            let Some(text) = source else {
                log::debug!("unit '{}' has no backing source, skipping", unit.name);
                report.results.push(UnitResult::skipped(unit));
                continue;
            };

            let mut result = UnitResult::new(unit);

            for stmt in split_statements(&text, unit.atomic) {
                result.statements_attempted += 1;

                match self.db.execute(stmt).await {
                    Ok(_) => result.statements_succeeded += 1,
                    Err(err) => match classify(&err) {
                        ErrorClass::Ignorable => {
                            result.ignorable_failures += 1;
                            log::warn!(
                                "unit '{}': change already applied: {}",
                                unit.name,
                                err
                            );
                        }
                        ErrorClass::Fatal if unit.phase == Phase::Schema => {
                            // Schema creation is a precondition for every
                            // later unit; the database is not in a
                            // known-good state past this point.
                            let reason = err.to_string();
                            result.record_fatal(reason.clone());
                            report.results.push(result);
                            report.abort(reason);
                            return report;
                        }
                        ErrorClass::Fatal => {
                            result.record_fatal(err.to_string());
                            log::warn!("unit '{}': statement failed: {}", unit.name, err);
                        }
                    },
                }
            }

            report.results.push(result);
        }

        report
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
