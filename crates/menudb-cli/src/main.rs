//! menudb command-line admin.
//!
//! Manage the menu and orders of a restaurant database from the shell.

mod commands;
mod error;
mod formatter;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use formatter::OutputFormat;
use menudb_core::storage::{DEFAULT_BUSY_TIMEOUT, DEFAULT_DATABASE_PATH, DEFAULT_POOL_SIZE};
use menudb_core::{MenuDb, StoreConfig};

use crate::commands::Command;
use crate::error::CliError;

/// menudb command-line admin
#[derive(Parser, Debug)]
#[command(name = "menudb")]
#[command(version, about = "Restaurant menu and order admin")]
pub struct Args {
    /// Path to the SQLite database file
    #[arg(short = 'd', long, env = "MENUDB_DATABASE", default_value = DEFAULT_DATABASE_PATH)]
    pub database: PathBuf,

    /// Output format
    #[arg(long, default_value = "table", value_enum)]
    pub format: OutputFormat,

    /// Maximum number of pooled connections
    #[arg(long, default_value_t = DEFAULT_POOL_SIZE)]
    pub pool_size: u32,

    /// How long SQLite waits on a locked database, in milliseconds
    #[arg(long, default_value_t = DEFAULT_BUSY_TIMEOUT.as_millis() as u64)]
    pub busy_timeout_ms: u64,

    /// Refuse to delete menu items that orders still reference
    #[arg(long)]
    pub enforce_foreign_keys: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Storage configuration described by the arguments.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.database)
            .with_pool_size(self.pool_size)
            .with_busy_timeout(Duration::from_millis(self.busy_timeout_ms))
            .with_foreign_keys(self.enforce_foreign_keys)
    }
}

fn main() {
    // Logs go to stderr so stdout stays parseable in json/csv mode.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "menudb=info,menudb_core=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let formatter = formatter::create_formatter(args.format);

    match run(&args, &*formatter) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            if !e.is_domain() {
                tracing::error!(error = %e, "command failed");
            }
            eprintln!("{}", formatter.format_error(&e.to_string()));
            std::process::exit(1);
        }
    }
}

fn run(args: &Args, formatter: &dyn formatter::Formatter) -> Result<String, CliError> {
    let db = MenuDb::open(args.store_config())?;
    commands::execute(&db, &args.command, formatter)
}
