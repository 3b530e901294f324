//! Run reports: per-unit and per-run execution outcomes
//!
//! A report is built fresh for every invocation and discarded after it is
//! presented; no migration state is persisted between runs.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::{MigrationUnit, Phase};

/// Outcome of executing a single migration unit.
#[derive(Debug, Clone, Serialize)]
pub struct UnitResult {
    /// Unit name
    pub name: String,

    /// Sequence position of the unit
    pub sequence: u32,

    /// Phase the unit executed in
    pub phase: Phase,

    /// Statements submitted to the database
    pub statements_attempted: usize,

    /// Statements that executed without error
    pub statements_succeeded: usize,

    /// Failures classified as already-applied (pre-existing object or row)
    pub ignorable_failures: usize,

    /// Failures classified as genuine defects
    pub fatal_failures: usize,

    /// First fatal error message, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fatal: Option<String>,

    /// True when an optional unit's source was absent and the unit was
    /// skipped without executing anything
    pub skipped: bool,
}

impl UnitResult {
    /// Fresh result for a unit about to execute.
    pub fn new(unit: &MigrationUnit) -> Self {
        Self {
            name: unit.name.clone(),
            sequence: unit.sequence,
            phase: unit.phase,
            statements_attempted: 0,
            statements_succeeded: 0,
            ignorable_failures: 0,
            fatal_failures: 0,
            fatal: None,
            skipped: false,
        }
    }

    /// Result for an optional unit whose source was absent.
    pub fn skipped(unit: &MigrationUnit) -> Self {
        Self {
            skipped: true,
            ..Self::new(unit)
        }
    }

    /// Record the first fatal error and keep counting later ones.
    pub fn record_fatal(&mut self, message: String) {
        self.fatal_failures += 1;
        if self.fatal.is_none() {
            self.fatal = Some(message);
        }
    }
}

/// Aggregate outcome of one full invocation of the runner.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Per-unit results in execution order
    pub results: Vec<UnitResult>,

    /// True when a schema-phase fatal error halted the run
    pub aborted: bool,

    /// The failure that halted the run, if it aborted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abort_reason: Option<String>,
}

impl RunReport {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            results: Vec::new(),
            aborted: false,
            abort_reason: None,
        }
    }

    /// Mark the run as aborted with the halting failure.
    pub fn abort(&mut self, reason: String) {
        self.aborted = true;
        self.abort_reason = Some(reason);
    }

    /// Summary counts across all unit results.
    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        for result in &self.results {
            if result.skipped {
                summary.units_skipped += 1;
            } else {
                summary.units_run += 1;
            }
            summary.statements_attempted += result.statements_attempted;
            summary.statements_succeeded += result.statements_succeeded;
            summary.ignorable_failures += result.ignorable_failures;
            summary.fatal_failures += result.fatal_failures;
        }
        summary
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub units_run: usize,
    pub units_skipped: usize,
    pub statements_attempted: usize,
    pub statements_succeeded: usize,
    pub ignorable_failures: usize,
    pub fatal_failures: usize,
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
