//! Profile command implementation.
//!
//! The profile command:
//! 1. Loads program debug info
//! 2. Streams the trace into an offset histogram
//! 3. Resolves scopes and ranks them
//! 4. Writes the report and prints the table

use super::models::ProfileArgs;
use crate::aggregator::{calculate_distribution, count_offsets, rank, to_report, RunInfo};
use crate::output::{render_table, write_report};
use crate::parser::schema::ProfileReport;
use crate::parser::{load_program, open_trace};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the profile command
///
/// **Public** - main entry point called from main.rs
///
/// Nothing is written or printed unless every stage succeeds.
///
/// # Errors
/// * Missing or malformed program file
/// * Missing trace file, missing `pc` column, or an invalid pc value
/// * File write errors
pub fn execute_profile(args: &ProfileArgs) -> Result<ProfileReport> {
    let start_time = Instant::now();

    info!("Step 1/4: Loading program from {}...", args.program.display());
    let program = load_program(&args.program).context("Failed to load program debug info")?;

    info!("Step 2/4: Counting trace records from {}...", args.trace.display());
    let records = open_trace(&args.trace).context("Failed to open trace")?;
    let histogram = count_offsets(records)
        .with_context(|| format!("Failed to read trace {}", args.trace.display()))?;

    let out_of_range = histogram.out_of_range(&program.metadata);
    if out_of_range > 0 {
        warn!(
            "{} distinct pc values fall outside the program's {} instructions",
            out_of_range, program.metadata.instruction_count
        );
    }

    info!(
        "Step 3/4: Resolving {} distinct offsets...",
        histogram.distinct_offsets()
    );
    let counts = histogram.resolve_scopes(&program.index);
    let ranked = rank(&counts);

    let distribution = calculate_distribution(&ranked);
    info!("Step distribution: {}", distribution.summary());

    debug!("Top 3 scopes:");
    for (i, scope) in ranked.iter().take(3).enumerate() {
        debug!("  {}. {} steps: {}", i + 1, scope.steps, scope.scope);
    }

    info!("Step 4/4: Writing output...");
    let run = RunInfo {
        program: args.program.display().to_string(),
        trace: args.trace.display().to_string(),
        instruction_count: program.metadata.instruction_count,
        distinct_offsets: histogram.distinct_offsets(),
    };
    let report = to_report(&ranked, &run);

    if let Some(path) = &args.output_json {
        write_report(&report, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    if args.print_table {
        println!("\nProfiling Results (Scope -> Step Count)");
        println!("{}", render_table(&ranked, args.top));
    }

    info!(
        "Profile completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(report)
}

/// Validate profile arguments
///
/// **Public** - can be called before execute_profile for early validation
pub fn validate_args(args: &ProfileArgs) -> Result<()> {
    if args.program.as_os_str().is_empty() {
        anyhow::bail!("Program path cannot be empty");
    }

    if args.trace.as_os_str().is_empty() {
        anyhow::bail!("Trace path cannot be empty");
    }

    if args.top == Some(0) {
        anyhow::bail!("top must be greater than 0");
    }

    if let Some(output) = &args.output_json {
        if output == &args.program || output == &args.trace {
            anyhow::bail!("Output path must differ from the input files");
        }
    }

    Ok(())
}
