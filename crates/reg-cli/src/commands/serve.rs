//! HTTP trigger endpoint wrapping the migration runner

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use reg_core::Catalog;
use reg_db::{Database, PgBackend};
use reg_runner::Runner;

use crate::cli::{GlobalArgs, ServeArgs};
use crate::commands::common::{missing_url_message, resolve_database_url};

/// Configuration shared across requests. The database connection itself is
/// acquired per run and released when the run ends.
struct AppState {
    database_url: Option<String>,
    migrations_dir: PathBuf,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, global: &GlobalArgs) -> Result<()> {
    let state = Arc::new(AppState {
        database_url: global.database_url.clone(),
        migrations_dir: PathBuf::from(&global.migrations_dir),
    });

    let app = Router::new()
        .route("/api/init-db", post(init_db))
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .context("Invalid host:port")?;

    println!("Registrar listening on http://{}", addr);
    println!("POST /api/init-db to initialize the database. Press Ctrl+C to stop.\n");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}:{}", args.host, args.port))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    println!("Shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("failed to install Ctrl+C handler: {}", e);
    }
}

/// POST /api/init-db: run the full migration sequence.
///
/// The caller receives a single success/error JSON regardless of how many
/// individual statements were ignorable.
async fn init_db(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    let Some(url) = resolve_database_url(state.database_url.as_deref()) else {
        return error_response(missing_url_message());
    };

    let db = match PgBackend::connect(&url).await {
        Ok(db) => Arc::new(db),
        Err(e) => return error_response(e.to_string()),
    };

    log::debug!("initializing database over {}", db.backend_name());

    let catalog = Catalog::standard(&state.migrations_dir);
    let report = Runner::new(db.clone(), catalog).run().await;

    db.close().await;

    if report.aborted {
        let reason = report
            .abort_reason
            .unwrap_or_else(|| "migration aborted".to_string());
        return error_response(reason);
    }

    let summary = report.summary();
    let message = format!(
        "Database initialized: {} statement(s) succeeded, {} already applied, {} unit(s) skipped",
        summary.statements_succeeded, summary.ignorable_failures, summary.units_skipped
    );
    (
        StatusCode::OK,
        Json(json!({ "success": true, "message": message })),
    )
}

fn error_response(message: String) -> (StatusCode, Json<Value>) {
    log::warn!("init-db failed: {}", message);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
}

#[cfg(test)]
#[path = "serve_test.rs"]
mod tests;
