//! Migration catalog: the ordered, finite set of migration units
//!
//! The catalog is fixed at build time. Units 001 and 002 are embedded in the
//! binary; later incremental units are read from a migrations directory and
//! may legitimately be absent from an environment.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Schema creation SQL (unit 001), embedded at build time.
pub const CREATE_TABLES_SQL: &str = include_str!("../sql/001_create_tables.sql");

/// Seed data SQL (unit 002), embedded at build time.
pub const SEED_DATA_SQL: &str = include_str!("../sql/002_seed_data.sql");

/// Execution phase a migration unit belongs to.
///
/// The phase determines the abort policy: a fatal error while creating the
/// schema aborts the run, while seed and incremental failures are recorded
/// and the run continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Table, extension, and policy creation
    Schema,
    /// Reference data seeding
    Seed,
    /// Best-effort forward alterations
    Incremental,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Schema => write!(f, "schema"),
            Phase::Seed => write!(f, "seed"),
            Phase::Incremental => write!(f, "incremental"),
        }
    }
}

/// Where a unit's SQL text comes from.
#[derive(Debug, Clone)]
pub enum UnitSource {
    /// SQL compiled into the binary
    Embedded(&'static str),
    /// SQL read from a file at run time
    File(PathBuf),
}

/// One named, ordered piece of schema/seed/alteration SQL.
#[derive(Debug, Clone)]
pub struct MigrationUnit {
    /// Position in the total execution order; assigned once, never renumbered
    pub sequence: u32,

    /// Unit name used in progress output and reports
    pub name: String,

    /// Backing SQL text
    pub source: UnitSource,

    /// Phase this unit executes in
    pub phase: Phase,

    /// Atomic units are submitted as a single statement, never split
    pub atomic: bool,

    /// Optional units may be absent from the environment; absence is a skip
    pub optional: bool,
}

impl MigrationUnit {
    /// Load the unit's SQL text.
    ///
    /// Returns `Ok(None)` when an optional unit's backing file is absent.
    /// A missing required source is a precondition failure.
    pub fn load(&self) -> CoreResult<Option<String>> {
        match &self.source {
            UnitSource::Embedded(sql) => Ok(Some((*sql).to_string())),
            UnitSource::File(path) => {
                if !path.exists() {
                    if self.optional {
                        return Ok(None);
                    }
                    return Err(CoreError::UnitSourceMissing {
                        unit: self.name.clone(),
                        path: path.display().to_string(),
                    });
                }
                let text =
                    std::fs::read_to_string(path).map_err(|e| CoreError::UnitSourceRead {
                        unit: self.name.clone(),
                        source: e,
                    })?;
                if text.trim().is_empty() {
                    return Err(CoreError::UnitSourceEmpty {
                        unit: self.name.clone(),
                    });
                }
                Ok(Some(text))
            }
        }
    }
}

/// Ordered, restartable sequence of migration units.
#[derive(Debug, Clone)]
pub struct Catalog {
    units: Vec<MigrationUnit>,
}

impl Catalog {
    /// Build a catalog from units in any order.
    ///
    /// Units are sorted by sequence position so incidental discovery order
    /// never affects execution order. Duplicate positions are rejected.
    pub fn new(mut units: Vec<MigrationUnit>) -> CoreResult<Self> {
        units.sort_by_key(|u| u.sequence);
        for pair in units.windows(2) {
            if pair[0].sequence == pair[1].sequence {
                return Err(CoreError::DuplicateSequence {
                    sequence: pair[0].sequence,
                    first: pair[0].name.clone(),
                    second: pair[1].name.clone(),
                });
            }
        }
        Ok(Self { units })
    }

    /// The standard Registrar catalog: schema creation, data seeding, and
    /// the optional contact-columns alteration read from `migrations_dir`.
    pub fn standard(migrations_dir: &Path) -> Self {
        Self {
            units: vec![
                MigrationUnit {
                    sequence: 1,
                    name: "create_tables".to_string(),
                    source: UnitSource::Embedded(CREATE_TABLES_SQL),
                    phase: Phase::Schema,
                    atomic: false,
                    optional: false,
                },
                MigrationUnit {
                    sequence: 2,
                    name: "seed_data".to_string(),
                    source: UnitSource::Embedded(SEED_DATA_SQL),
                    phase: Phase::Seed,
                    atomic: false,
                    optional: false,
                },
                MigrationUnit {
                    sequence: 3,
                    name: "add_student_contact_columns".to_string(),
                    source: UnitSource::File(
                        migrations_dir.join("003_add_student_contact_columns.sql"),
                    ),
                    phase: Phase::Incremental,
                    atomic: true,
                    optional: true,
                },
            ],
        }
    }

    /// Units in execution order.
    pub fn units(&self) -> &[MigrationUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
