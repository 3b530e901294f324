use super::*;
use crate::catalog::{MigrationUnit, UnitSource};

fn unit(sequence: u32, name: &str, phase: Phase) -> MigrationUnit {
    MigrationUnit {
        sequence,
        name: name.to_string(),
        source: UnitSource::Embedded("select 1;"),
        phase,
        atomic: false,
        optional: false,
    }
}

#[test]
fn test_unit_result_new() {
    let result = UnitResult::new(&unit(1, "create_tables", Phase::Schema));
    assert_eq!(result.name, "create_tables");
    assert_eq!(result.sequence, 1);
    assert_eq!(result.statements_attempted, 0);
    assert!(result.fatal.is_none());
    assert!(!result.skipped);
}

#[test]
fn test_skipped_result() {
    let result = UnitResult::skipped(&unit(3, "later", Phase::Incremental));
    assert!(result.skipped);
    assert_eq!(result.statements_attempted, 0);
    assert!(result.fatal.is_none());
}

#[test]
fn test_record_fatal_keeps_first_message() {
    let mut result = UnitResult::new(&unit(2, "seed_data", Phase::Seed));
    result.record_fatal("first".to_string());
    result.record_fatal("second".to_string());

    assert_eq!(result.fatal_failures, 2);
    assert_eq!(result.fatal.as_deref(), Some("first"));
}

#[test]
fn test_summary_totals() {
    let mut report = RunReport::new();

    let mut first = UnitResult::new(&unit(1, "create_tables", Phase::Schema));
    first.statements_attempted = 29;
    first.statements_succeeded = 29;

    let mut second = UnitResult::new(&unit(2, "seed_data", Phase::Seed));
    second.statements_attempted = 5;
    second.statements_succeeded = 3;
    second.ignorable_failures = 1;
    second.record_fatal("boom".to_string());

    report.results.push(first);
    report.results.push(second);
    report
        .results
        .push(UnitResult::skipped(&unit(3, "later", Phase::Incremental)));

    let summary = report.summary();
    assert_eq!(summary.units_run, 2);
    assert_eq!(summary.units_skipped, 1);
    assert_eq!(summary.statements_attempted, 34);
    assert_eq!(summary.statements_succeeded, 32);
    assert_eq!(summary.ignorable_failures, 1);
    assert_eq!(summary.fatal_failures, 1);
    assert!(!report.aborted);
}

#[test]
fn test_abort() {
    let mut report = RunReport::new();
    report.abort("connection lost".to_string());
    assert!(report.aborted);
    assert_eq!(report.abort_reason.as_deref(), Some("connection lost"));
}

#[test]
fn test_report_serializes() {
    let mut report = RunReport::new();
    report
        .results
        .push(UnitResult::new(&unit(1, "create_tables", Phase::Schema)));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["aborted"], false);
    assert_eq!(json["results"][0]["name"], "create_tables");
    assert_eq!(json["results"][0]["phase"], "schema");
}
