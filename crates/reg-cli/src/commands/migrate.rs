//! Migrate command implementation

use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use reg_core::report::UnitResult;
use reg_db::PgBackend;
use reg_runner::Runner;

use crate::cli::GlobalArgs;
use crate::commands::common::{build_catalog, missing_url_message, resolve_database_url};

/// Execute the migrate command
pub async fn execute(global: &GlobalArgs) -> Result<()> {
    let url = resolve_database_url(global.database_url.as_deref())
        .ok_or_else(|| anyhow!(missing_url_message()))?;

    let catalog = build_catalog(global);

    if global.verbose {
        eprintln!(
            "[verbose] Catalog has {} units; migrations dir: {}",
            catalog.len(),
            global.migrations_dir
        );
    }

    let db = Arc::new(
        PgBackend::connect(&url)
            .await
            .context("Failed to connect to database")?,
    );

    println!("Running {} migration units...\n", catalog.len());

    let runner = Runner::new(db.clone(), catalog);
    let report = runner.run().await;

    for result in &report.results {
        println!("{}", unit_line(result));
    }

    let summary = report.summary();
    println!(
        "\n{} unit(s) run, {} skipped: {} statement(s) attempted, {} succeeded, {} already applied, {} failed",
        summary.units_run,
        summary.units_skipped,
        summary.statements_attempted,
        summary.statements_succeeded,
        summary.ignorable_failures,
        summary.fatal_failures,
    );

    db.close().await;

    if report.aborted {
        let reason = report
            .abort_reason
            .unwrap_or_else(|| "migration aborted".to_string());
        bail!("Migration aborted: {}", reason);
    }

    Ok(())
}

/// One annotated progress line per unit: success, skip, warning, or fatal.
fn unit_line(result: &UnitResult) -> String {
    if result.skipped {
        return format!(
            "  - {} ({}) skipped: source not present",
            result.name, result.phase
        );
    }
    if let Some(fatal) = &result.fatal {
        return format!("  \u{2717} {} ({}) {}", result.name, result.phase, fatal);
    }
    if result.ignorable_failures > 0 {
        return format!(
            "  \u{2713} {} ({}) {} succeeded, {} already applied",
            result.name, result.phase, result.statements_succeeded, result.ignorable_failures
        );
    }
    format!(
        "  \u{2713} {} ({}) {} statement(s)",
        result.name, result.phase, result.statements_succeeded
    )
}

#[cfg(test)]
#[path = "migrate_test.rs"]
mod tests;
