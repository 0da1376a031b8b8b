//! Aggregate a stream of pc values into per-scope step counts.
//!
//! Aggregation runs in two phases:
//! 1. Count raw occurrences per distinct offset while streaming the trace
//! 2. Resolve each distinct offset once and fold its count into its scope
//!
//! Traces revisit a few hundred offsets millions of times, so resolution
//! cost scales with distinct offsets rather than trace length.

use super::resolver::{resolve_detailed, Resolution};
use crate::parser::{parse_pc, DebugInfoIndex, ProgramMetadata};
use crate::utils::error::TraceError;
use log::debug;
use std::collections::HashMap;

/// Raw occurrence count per distinct offset
///
/// **Public** - phase one of aggregation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetHistogram {
    counts: HashMap<u64, u64>,
    total_steps: u64,
}

impl OffsetHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `offset`
    pub fn record(&mut self, offset: u64) {
        *self.counts.entry(offset).or_insert(0) += 1;
        self.total_steps += 1;
    }

    /// Parse a raw pc value and count it
    ///
    /// # Errors
    /// * `TraceError::InvalidPcFormat` - value rejected by [`parse_pc`]
    pub fn record_pc(&mut self, value: &str, row: u64) -> Result<u64, TraceError> {
        let offset = parse_pc(value, row)?;
        self.record(offset);
        Ok(offset)
    }

    /// Fold another histogram's counts into this one
    ///
    /// Lets a caller count disjoint parts of a trace separately and still
    /// resolve every distinct offset once.
    pub fn merge(&mut self, other: OffsetHistogram) {
        for (offset, count) in other.counts {
            *self.counts.entry(offset).or_insert(0) += count;
        }
        self.total_steps += other.total_steps;
    }

    /// Occurrences of a single offset
    pub fn count(&self, offset: u64) -> u64 {
        self.counts.get(&offset).copied().unwrap_or(0)
    }

    /// Number of distinct offsets seen
    pub fn distinct_offsets(&self) -> usize {
        self.counts.len()
    }

    /// Number of records counted
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Distinct offsets outside `[0, instruction_count)`
    pub fn out_of_range(&self, metadata: &ProgramMetadata) -> usize {
        self.counts
            .keys()
            .filter(|&&offset| !metadata.contains(offset))
            .count()
    }

    /// Resolve each distinct offset once and sum counts per scope
    ///
    /// **Public** - phase two of aggregation
    pub fn resolve_scopes(&self, index: &DebugInfoIndex) -> ScopeCounts {
        let mut scopes = ScopeCounts::default();
        let mut stats = ResolutionStats::default();

        for (&offset, &count) in &self.counts {
            let resolution = resolve_detailed(offset, index);
            stats.observe(&resolution);
            scopes.add(resolution.scope(), count);
        }

        debug!(
            "Resolved {} distinct offsets into {} scopes ({})",
            self.counts.len(),
            scopes.len(),
            stats.summary()
        );

        scopes
    }
}

/// Per-rule tally of offset resolutions, for logging
#[derive(Debug, Default)]
struct ResolutionStats {
    direct: usize,
    neighbor: usize,
    unmapped: usize,
}

impl ResolutionStats {
    fn observe(&mut self, resolution: &Resolution<'_>) {
        match resolution {
            Resolution::Direct(_) => self.direct += 1,
            Resolution::Neighbor { .. } => self.neighbor += 1,
            Resolution::Unmapped => self.unmapped += 1,
        }
    }

    fn summary(&self) -> String {
        format!(
            "direct: {}, neighbor: {}, unmapped: {}",
            self.direct, self.neighbor, self.unmapped
        )
    }
}

/// Step count per scope identifier
///
/// **Public** - aggregation result, input to ranking
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeCounts {
    counts: HashMap<String, u64>,
}

impl ScopeCounts {
    /// Add `steps` to `scope`
    pub fn add(&mut self, scope: &str, steps: u64) {
        match self.counts.get_mut(scope) {
            Some(total) => *total += steps,
            None => {
                self.counts.insert(scope.to_string(), steps);
            }
        }
    }

    /// Steps attributed to `scope` (0 if absent)
    pub fn get(&self, scope: &str) -> u64 {
        self.counts.get(scope).copied().unwrap_or(0)
    }

    /// Sum of all step counts
    pub fn total_steps(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(scope, steps)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(scope, &steps)| (scope.as_str(), steps))
    }
}

/// Count a stream of pc records into an offset histogram
///
/// **Public** - phase one over a fallible record stream (e.g. a CSV reader)
///
/// Rows are numbered from 1 in stream order.
///
/// # Errors
/// * Any error yielded by the stream
/// * `TraceError::InvalidPcFormat` - first record that fails to parse
pub fn count_offsets<I, S>(records: I) -> Result<OffsetHistogram, TraceError>
where
    I: IntoIterator<Item = Result<S, TraceError>>,
    S: AsRef<str>,
{
    let mut histogram = OffsetHistogram::new();

    for (row, record) in (1u64..).zip(records) {
        histogram.record_pc(record?.as_ref(), row)?;
    }

    debug!(
        "Counted {} trace records over {} distinct offsets",
        histogram.total_steps(),
        histogram.distinct_offsets()
    );

    Ok(histogram)
}

/// Aggregate raw pc strings into per-scope step counts
///
/// **Public** - main entry point for aggregation
///
/// The stream is consumed once, in order. Any invalid pc aborts the whole
/// aggregation; no partial counts are returned.
///
/// # Errors
/// * `TraceError::InvalidPcFormat` - first record that fails to parse
pub fn aggregate<I, S>(pcs: I, index: &DebugInfoIndex) -> Result<ScopeCounts, TraceError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    aggregate_records(pcs.into_iter().map(Ok), index)
}

/// Aggregate a fallible record stream into per-scope step counts
///
/// **Public** - variant of [`aggregate`] for readers that can fail mid-stream
pub fn aggregate_records<I, S>(records: I, index: &DebugInfoIndex) -> Result<ScopeCounts, TraceError>
where
    I: IntoIterator<Item = Result<S, TraceError>>,
    S: AsRef<str>,
{
    Ok(count_offsets(records)?.resolve_scopes(index))
}
