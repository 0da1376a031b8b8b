//! Rank scopes by step count.

use super::scope_counter::ScopeCounts;
use log::debug;
use serde::{Deserialize, Serialize};

/// A scope and its step count in ranked output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedScope {
    pub scope: String,
    pub steps: u64,
}

impl RankedScope {
    pub fn new(scope: impl Into<String>, steps: u64) -> Self {
        Self {
            scope: scope.into(),
            steps,
        }
    }
}

/// Rank scopes by descending step count
///
/// **Public** - final stage of the profiling pipeline
///
/// Equal counts are ordered by ascending scope identifier so identical
/// inputs always rank identically. Nothing is truncated.
pub fn rank(counts: &ScopeCounts) -> Vec<RankedScope> {
    let mut ranked: Vec<RankedScope> = counts
        .iter()
        .map(|(scope, steps)| RankedScope::new(scope, steps))
        .collect();

    ranked.sort_by(|a, b| b.steps.cmp(&a.steps).then_with(|| a.scope.cmp(&b.scope)));

    debug!("Ranked {} scopes", ranked.len());

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rank_descending_with_lexical_ties() {
        let mut counts = ScopeCounts::default();
        counts.add("m.zeta", 4);
        counts.add("m.alpha", 4);
        counts.add("m.big", 10);
        counts.add("unmapped", 1);
        counts.add("m.beta", 4);

        assert_eq!(
            rank(&counts),
            vec![
                RankedScope::new("m.big", 10),
                RankedScope::new("m.alpha", 4),
                RankedScope::new("m.beta", 4),
                RankedScope::new("m.zeta", 4),
                RankedScope::new("unmapped", 1),
            ]
        );
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(&ScopeCounts::default()).is_empty());
    }

    #[test]
    fn test_rank_does_not_consume_counts() {
        let mut counts = ScopeCounts::default();
        counts.add("a", 2);
        let first = rank(&counts);
        let second = rank(&counts);
        assert_eq!(first, second);
        assert_eq!(counts.get("a"), 2);
    }
}
