//! view-router
//!
//! Bootstrap for the application route table.
//!
//! # Architecture Overview
//!
//! ```text
//!     config file (optional)
//!     ──────────────────────┐
//!                           ▼
//!                    ┌─────────────┐    ┌──────────────┐    ┌─────────────┐
//!   requested path ─▶│  navigator  │───▶│ route table  │───▶│  SM2 / SM3  │
//!                    │  (history)  │◀───│ (immutable)  │    │    / SM4    │
//!                    └─────────────┘    └──────────────┘    └─────────────┘
//!                           │
//!                           ▼
//!                 logging + metrics counters
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;

use view_router::config::{self, ConfigError, RouterConfig};
use view_router::observability::{logging, metrics};
use view_router::routing::{Navigator, Resolution, RouteTable};

/// Exit code for a path with no registered route.
const EXIT_NO_MATCH: u8 = 2;

#[derive(Parser)]
#[command(name = "view-router")]
#[command(about = "Resolve application paths against the view route table", long_about = None)]
struct Cli {
    /// TOML config file; the built-in table is used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level, overriding the config file (RUST_LOG still wins)
    #[arg(short, long, global = true, value_parser = logging::parse_level)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table
    Routes,
    /// Resolve a single path
    Resolve { path: String },
    /// Navigate through locations in order ("back" and "forward" move in history)
    Navigate {
        #[arg(required = true)]
        locations: Vec<String>,
    },
    /// Validate the configuration
    Check,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => RouterConfig::default(),
    };

    logging::init_logging(&config.observability, cli.log_level.as_deref())?;
    metrics::describe_metrics();

    let table = RouteTable::from_config(&config.routes).map_err(|errors| {
        ConfigError::Validation(errors.into_iter().map(Into::into).collect())
    })?;
    let table = Arc::new(table);

    tracing::info!(
        config = ?cli.config,
        routes = table.len(),
        max_history = config.history.max_entries,
        "Route table installed"
    );

    match cli.command {
        Commands::Routes => {
            print_json(&table.routes())?;
        }
        Commands::Resolve { path } => {
            let resolution = table.resolve(&path);
            print_json(&resolution)?;
            if resolution == Resolution::NoMatch {
                return Ok(ExitCode::from(EXIT_NO_MATCH));
            }
        }
        Commands::Navigate { locations } => {
            let mut navigator = Navigator::new(table, &config.history);
            for location in &locations {
                let moved = match location.as_str() {
                    "back" => navigator.back(),
                    "forward" => navigator.forward(),
                    raw => match navigator.push(raw) {
                        Ok(_) => true,
                        Err(e) => {
                            eprintln!("Error: {}", e);
                            return Ok(ExitCode::from(EXIT_NO_MATCH));
                        }
                    },
                };
                if !moved {
                    tracing::warn!(step = %location, "Nothing to move to in history");
                }
            }
            print_json(&navigator.current())?;
        }
        Commands::Check => {
            println!("Configuration OK ({} routes)", table.len());
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
