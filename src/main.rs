//! Cairo Trace Profiler CLI
//!
//! Attributes every step of a Cairo VM trace to the innermost function
//! scope of the executed instruction and ranks scopes by step count.

use anyhow::Result;
use cairo_trace_profiler::commands::{
    display_schema, display_version, execute_profile, validate_args, validate_report_file,
    ProfileArgs,
};
use cairo_trace_profiler::utils::config::{DEFAULT_PROGRAM_PATH, DEFAULT_TRACE_PATH};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

/// Cairo Trace Profiler - step counts per function scope
#[derive(Parser, Debug)]
#[command(name = "cairo-profile")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Profile a trace against a compiled program
    Profile {
        /// Compiled program JSON with debug_info
        #[arg(short, long, default_value = DEFAULT_PROGRAM_PATH, env = "CAIRO_PROFILE_PROGRAM")]
        program: PathBuf,

        /// Trace CSV with a `pc` column
        #[arg(short, long, default_value = DEFAULT_TRACE_PATH, env = "CAIRO_PROFILE_TRACE")]
        trace: PathBuf,

        /// Output path for JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show only the top N scopes in the table
        #[arg(long)]
        top: Option<usize>,

        /// Do not print the table
        #[arg(short, long)]
        quiet: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Profile {
            program,
            trace,
            output,
            top,
            quiet,
        } => {
            let args = ProfileArgs {
                program,
                trace,
                output_json: output,
                top,
                print_table: !quiet,
            };

            validate_args(&args)?;
            execute_profile(&args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
