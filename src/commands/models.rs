use crate::utils::config::{DEFAULT_PROGRAM_PATH, DEFAULT_TRACE_PATH};
use std::path::PathBuf;

/// Arguments for the profile command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ProfileArgs {
    /// Compiled program JSON with debug info
    pub program: PathBuf,

    /// Trace CSV with a `pc` column
    pub trace: PathBuf,

    /// Output path for JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Show at most this many rows in the table (None = all)
    pub top: Option<usize>,

    /// Print the ranked table to stdout
    pub print_table: bool,
}

impl Default for ProfileArgs {
    fn default() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_PROGRAM_PATH),
            trace: PathBuf::from(DEFAULT_TRACE_PATH),
            output_json: None,
            top: None,
            print_table: true,
        }
    }
}
