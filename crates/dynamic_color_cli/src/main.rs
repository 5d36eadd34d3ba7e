//! Dynamic color CLI
//!
//! Runs method calls against a TOML resource table and prints the JSON the
//! host application would receive.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "dynamic-color")]
#[command(about = "Query dynamic color palettes and system color roles", long_about = None)]
#[command(version)]
struct Cli {
    /// Resource table (TOML). Without one, dynamic color is unavailable.
    #[arg(short, long, global = true)]
    table: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dispatch a method call and print its result as JSON
    Call {
        /// Method name (getCorePalette, getSystemColors)
        method: String,

        /// Brightness argument for getSystemColors
        #[arg(short, long)]
        brightness: Option<String>,

        /// Print the full response envelope instead of the bare result
        #[arg(long)]
        envelope: bool,
    },

    /// List the resource names a table can define
    Resources {
        /// Only list resources the table is missing
        #[arg(long)]
        missing: bool,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let table = commands::load_table(cli.table.as_deref())?;

    match cli.command {
        Commands::Call {
            method,
            brightness,
            envelope,
        } => {
            let output = commands::call(table, &method, brightness.as_deref(), envelope)?;
            println!("{}", output);
        }
        Commands::Resources { missing } => {
            for line in commands::resources(&table, missing) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
