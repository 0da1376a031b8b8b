//! Configuration and constants for the profiler.

/// Current report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Scope assigned to offsets for which no scope could be inferred
pub const UNMAPPED_SCOPE: &str = "unmapped";

// Neighbor offsets probed when an offset has no debug entry of its own.
// Order and radius are fixed: +1 wins over -1, and nothing beyond +-2 is tried.
pub const NEIGHBOR_PROBES: [i64; 4] = [1, -1, 2, -2];

/// Prefix marking a hexadecimal pc value (case-sensitive)
pub const HEX_PREFIX: &str = "0x";

/// Column holding the program counter in trace CSV files
pub const PC_COLUMN: &str = "pc";

// Default input locations, relative to the working directory
pub const DEFAULT_PROGRAM_PATH: &str = "task/program.json";
pub const DEFAULT_TRACE_PATH: &str = "task/trace.csv";
