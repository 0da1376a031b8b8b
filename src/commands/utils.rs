use crate::output::read_report;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::Result;
use std::path::Path;

/// Validate a report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Program: {}", report.program);
    println!("  Trace: {}", report.trace);
    println!("  Total Steps: {}", report.total_steps);
    println!("  Distinct Offsets: {}", report.distinct_offsets);
    println!("  Scopes: {}", report.scopes.len());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Cairo Trace Profiler Report Schema");
    println!("Current Version: {}", REPORT_SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  program: string            - Program file path");
        println!("  trace: string              - Trace file path");
        println!("  instruction_count: number  - Instructions in the program");
        println!("  total_steps: number        - Trace records counted");
        println!("  distinct_offsets: number   - Distinct pc values");
        println!("  scopes: array              - Scopes ranked by step count");
        println!("    scope: string            - Scope identifier or 'unmapped'");
        println!("    steps: number            - Steps attributed to the scope");
        println!("    percentage: number       - Percentage of total steps");
        println!("  generated_at: string       - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Cairo Trace Profiler v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_SCHEMA_VERSION);
    println!();
    println!("Per-scope step-count profiling for Cairo VM execution traces.");
}
