//! Output writers for profile data.
//!
//! This module handles presenting results:
//! - JSON reports
//! - Text tables

pub mod json;
pub mod table;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use table::render_table;
