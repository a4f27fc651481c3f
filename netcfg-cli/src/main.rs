//! Command-line interface for netcfg
//!
//! Usage:
//!   netcfg model `<path>` [--format `<format>`]   - Parse and print an architecture file
//!   netcfg data `<path>` [--format `<format>`]    - Parse and print a flat dataset file
//!   netcfg check `<path>`...                      - Validate architecture files

mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use netcfg_core::{load_architecture, load_flat_config};

#[derive(Debug, Parser)]
#[command(name = "netcfg", version, about = "Inspect darknet-style network and dataset config files")]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse an architecture file (`[block]` sections)
    Model {
        path: PathBuf,
        #[arg(short, long, value_enum, default_value_t = Format::Summary)]
        format: Format,
    },
    /// Parse a flat `key=value` dataset file
    Data {
        path: PathBuf,
        #[arg(short, long, value_enum, default_value_t = Format::Summary)]
        format: Format,
    },
    /// Check that architecture files parse
    Check {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Summary,
    Json,
    Yaml,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "netcfg=debug,netcfg_core=debug"
    } else {
        "netcfg=info,netcfg_core=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Model { path, format } => {
            let doc = load_architecture(&path)
                .with_context(|| format!("cannot load architecture {}", path.display()))?;
            print!("{}", output::render_architecture(&doc, format)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Data { path, format } => {
            let cfg = load_flat_config(&path)
                .with_context(|| format!("cannot load data config {}", path.display()))?;
            print!("{}", output::render_flat(&cfg, format)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { paths } => Ok(check(&paths)),
    }
}

fn check(paths: &[PathBuf]) -> ExitCode {
    let mut failed = 0;
    for path in paths {
        match load_architecture(path) {
            Ok(doc) => println!("ok    {} ({} modules)", path.display(), doc.len()),
            Err(err) => {
                failed += 1;
                println!("FAIL  {}", err);
            }
        }
    }
    tracing::info!(checked = paths.len(), failed, "check finished");

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
