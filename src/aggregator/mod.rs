//! Scope resolution, aggregation and ranking of trace data.
//!
//! This module transforms a debug index and a pc stream into:
//! - Per-scope step counts (resolved once per distinct offset)
//! - A deterministic ranking of scopes by step count
//! - Distribution statistics and report entries

pub mod metrics;
pub mod ranking;
pub mod resolver;
pub mod scope_counter;

// Re-export main types and functions
pub use metrics::{calculate_distribution, to_report, RunInfo, StepDistribution};
pub use ranking::{rank, RankedScope};
pub use resolver::{resolve, resolve_detailed, Resolution};
pub use scope_counter::{aggregate, aggregate_records, count_offsets, OffsetHistogram, ScopeCounts};

use crate::parser::DebugInfoIndex;
use crate::utils::error::TraceError;

/// Run the whole pipeline over an in-memory or streamed pc sequence
///
/// **Public** - `aggregate` followed by `rank`; holds no state between calls
pub fn profile_trace<I, S>(pcs: I, index: &DebugInfoIndex) -> Result<Vec<RankedScope>, TraceError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let counts = aggregate(pcs, index)?;
    Ok(rank(&counts))
}
