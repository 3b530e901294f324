//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// Registrar - bring the student records database to a schema-complete,
/// seeded state
#[derive(Parser, Debug)]
#[command(name = "reg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Postgres connection string (overrides POSTGRES_URL / DATABASE_URL)
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    /// Directory holding file-backed incremental migrations
    #[arg(short = 'm', long, global = true, default_value = "migrations")]
    pub migrations_dir: String,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full migration sequence against the database
    Migrate,

    /// Serve the HTTP trigger endpoint
    Serve(ServeArgs),
}

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Host to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind
    #[arg(long, default_value = "3000")]
    pub port: u16,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
