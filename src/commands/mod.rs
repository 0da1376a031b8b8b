//! CLI command implementations.
//!
//! Commands orchestrate the library components and own all file access.

pub mod models;
pub mod profile;
pub mod utils;

// Re-export main command functions
pub use models::ProfileArgs;
pub use profile::{execute_profile, validate_args};
pub use utils::{display_schema, display_version, validate_report_file};
