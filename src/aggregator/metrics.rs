//! Summary metrics and report entries for ranked scopes.

use super::ranking::RankedScope;
use crate::parser::schema::{ProfileReport, ScopeEntry};
use crate::utils::config::{REPORT_SCHEMA_VERSION, UNMAPPED_SCOPE};
use log::debug;

/// Percentage of `steps` in `total`, 0 when `total` is 0
pub fn percentage(steps: u64, total: u64) -> f64 {
    if total > 0 {
        (steps as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

/// Convert ranked scopes into report entries
///
/// **Public** - used when building the JSON report
pub fn calculate_scope_entries(ranked: &[RankedScope], total_steps: u64) -> Vec<ScopeEntry> {
    ranked
        .iter()
        .map(|scope| create_scope_entry(scope, total_steps))
        .collect()
}

/// Create a ScopeEntry from a RankedScope
pub fn create_scope_entry(scope: &RankedScope, total_steps: u64) -> ScopeEntry {
    ScopeEntry {
        scope: scope.scope.clone(),
        steps: scope.steps,
        percentage: percentage(scope.steps, total_steps),
    }
}

/// Calculate step distribution statistics
///
/// **Public** - provides summary statistics
pub fn calculate_distribution(ranked: &[RankedScope]) -> StepDistribution {
    let total_steps: u64 = ranked.iter().map(|s| s.steps).sum();
    let unmapped_steps = ranked
        .iter()
        .find(|s| s.scope == UNMAPPED_SCOPE)
        .map_or(0, |s| s.steps);

    let top_scope = ranked.first().map(|s| s.scope.clone());
    let top_scope_percentage = ranked
        .first()
        .map_or(0.0, |s| percentage(s.steps, total_steps));

    StepDistribution {
        total_steps,
        scope_count: ranked.len(),
        unmapped_steps,
        unmapped_percentage: percentage(unmapped_steps, total_steps),
        top_scope,
        top_scope_percentage,
    }
}

/// Step distribution statistics
///
/// **Public** - returned from calculate_distribution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepDistribution {
    /// Total steps across all scopes
    pub total_steps: u64,

    /// Number of distinct scopes
    pub scope_count: usize,

    /// Steps no scope could be inferred for
    pub unmapped_steps: u64,

    pub unmapped_percentage: f64,

    /// Scope with the most steps
    pub top_scope: Option<String>,

    pub top_scope_percentage: f64,
}

impl StepDistribution {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and debugging
    pub fn summary(&self) -> String {
        format!(
            "Total: {} steps | Scopes: {} | Unmapped: {} ({:.1}%) | Top: {} ({:.1}%)",
            self.total_steps,
            self.scope_count,
            self.unmapped_steps,
            self.unmapped_percentage,
            self.top_scope.as_deref().unwrap_or("-"),
            self.top_scope_percentage
        )
    }
}

/// Inputs and counters describing one profiling run
#[derive(Debug, Clone)]
pub struct RunInfo {
    pub program: String,
    pub trace: String,
    pub instruction_count: usize,
    pub distinct_offsets: usize,
}

/// Build the versioned JSON report for a profiling run
///
/// **Public** - used by commands to create final output
pub fn to_report(ranked: &[RankedScope], run: &RunInfo) -> ProfileReport {
    use chrono::Utc;

    let total_steps: u64 = ranked.iter().map(|s| s.steps).sum();
    debug!("Building report for {} scopes, {} steps", ranked.len(), total_steps);

    ProfileReport {
        version: REPORT_SCHEMA_VERSION.to_string(),
        program: run.program.clone(),
        trace: run.trace.clone(),
        instruction_count: run.instruction_count,
        total_steps,
        distinct_offsets: run.distinct_offsets,
        scopes: calculate_scope_entries(ranked, total_steps),
        generated_at: Utc::now().to_rfc3339(),
    }
}
