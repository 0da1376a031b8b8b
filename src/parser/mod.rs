//! Input parsing and schema definitions.
//!
//! This module handles:
//! - Deserializing compiled program metadata
//! - Building the offset -> scope debug index
//! - Streaming and parsing trace records
//! - Defining the output report schema

pub mod debug_info;
pub mod schema;
pub mod trace;

// Re-export main types
pub use debug_info::{
    load_program, parse_program, DebugEntry, DebugInfoIndex, LoadedProgram, ProgramMetadata,
};
pub use schema::{InstructionLocation, ProfileReport, ScopeEntry};
pub use trace::{aggregate_csv, open_trace, parse_pc, PcRecords};
