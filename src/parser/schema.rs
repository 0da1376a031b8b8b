//! JSON schema definitions for program metadata and profile reports.
//!
//! Input structs describe the subset of a compiled Cairo program we read.
//! Unknown fields are ignored so newer compiler output keeps loading.
//! Output structs define the versioned JSON report we write to disk.

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

/// Top-level compiled program file (`program.json`)
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramFile {
    /// Program instructions; only the length is used
    #[serde(default)]
    pub data: Vec<IgnoredAny>,

    /// Compiler debug metadata (absent for stripped programs)
    #[serde(default)]
    pub debug_info: Option<DebugInfoSection>,
}

/// The `debug_info` object of a compiled program
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DebugInfoSection {
    /// Decimal-string offset -> raw location record, in document order.
    /// Records stay untyped here so a bad record can be reported with its key.
    #[serde(default)]
    pub instruction_locations: Option<serde_json::Map<String, serde_json::Value>>,
}

/// One entry of `debug_info.instruction_locations`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InstructionLocation {
    /// Enclosing scopes, outermost first
    #[serde(default)]
    pub accessible_scopes: Vec<String>,
}

impl InstructionLocation {
    pub fn new<S: Into<String>>(scopes: impl IntoIterator<Item = S>) -> Self {
        Self {
            accessible_scopes: scopes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Top-level profile report written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Program file the debug info came from
    pub program: String,

    /// Trace file that was profiled
    pub trace: String,

    /// Number of instructions in the program
    pub instruction_count: usize,

    /// Total number of trace records counted
    pub total_steps: u64,

    /// Number of distinct pc values in the trace
    pub distinct_offsets: usize,

    /// Scopes ranked by step count (descending)
    pub scopes: Vec<ScopeEntry>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// Step count attributed to a single scope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeEntry {
    /// Dotted scope identifier, or "unmapped"
    pub scope: String,

    /// Steps executed while in this scope
    pub steps: u64,

    /// Percentage of total steps
    pub percentage: f64,
}
