//! Offset -> scope resolution with neighbor fallback.
//!
//! An offset with its own debug entry resolves to that entry's innermost
//! scope. An offset without one borrows the innermost scope of the first
//! neighbor in `NEIGHBOR_PROBES` that has a non-empty scope list. This is a
//! heuristic: adjacent offsets can belong to different functions.

use crate::parser::{DebugEntry, DebugInfoIndex};
use crate::utils::config::{NEIGHBOR_PROBES, UNMAPPED_SCOPE};

/// How an offset was attributed to a scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The offset has its own non-empty debug entry
    Direct(&'a str),

    /// Borrowed from the neighbor at `offset + delta`
    Neighbor { scope: &'a str, delta: i64 },

    /// Nothing usable at the offset or within the probe radius
    Unmapped,
}

impl<'a> Resolution<'a> {
    /// Scope identifier for this resolution
    pub fn scope(&self) -> &'a str {
        match *self {
            Resolution::Direct(scope) | Resolution::Neighbor { scope, .. } => scope,
            Resolution::Unmapped => UNMAPPED_SCOPE,
        }
    }
}

/// Resolve an offset to its most specific scope
///
/// **Public** - main entry point for scope inference
///
/// Never fails; offsets with no inferable scope map to `"unmapped"`.
pub fn resolve(offset: u64, index: &DebugInfoIndex) -> &str {
    resolve_detailed(offset, index).scope()
}

/// Resolve an offset and report which rule produced the scope
///
/// **Public** - used for resolution statistics
///
/// # Algorithm
/// 1. Exact entry: its last scope, or `Unmapped` if the list is empty.
///    An empty exact entry does not fall through to neighbors.
/// 2. Otherwise probe `+1, -1, +2, -2` and stop at the first neighbor
///    with a non-empty scope list. Probes below zero are skipped.
/// 3. Otherwise `Unmapped`.
pub fn resolve_detailed(offset: u64, index: &DebugInfoIndex) -> Resolution<'_> {
    if let Some(entry) = index.lookup(offset) {
        return entry
            .innermost_scope()
            .map_or(Resolution::Unmapped, Resolution::Direct);
    }

    NEIGHBOR_PROBES
        .iter()
        .find_map(|&delta| {
            let neighbor = offset.checked_add_signed(delta)?;
            let scope = index.lookup(neighbor).and_then(DebugEntry::innermost_scope)?;
            Some(Resolution::Neighbor { scope, delta })
        })
        .unwrap_or(Resolution::Unmapped)
}
