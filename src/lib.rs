//! Cairo Trace Profiler
//!
//! Per-function-scope step counts for Cairo VM execution traces.
//!
//! The pipeline is three pure stages:
//!
//! 1. [`parser::DebugInfoIndex`] maps instruction offsets to scopes
//! 2. [`aggregator::aggregate`] counts pcs per distinct offset, then
//!    resolves each offset once (with +-2 neighbor fallback)
//! 3. [`aggregator::rank`] orders scopes by step count
//!
//! ```
//! use cairo_trace_profiler::aggregator::{profile_trace, RankedScope};
//! use cairo_trace_profiler::parser::{DebugInfoIndex, InstructionLocation};
//!
//! let index = DebugInfoIndex::build([
//!     ("0", InstructionLocation::new(["a.b"])),
//!     ("5", InstructionLocation::new(["a.c"])),
//! ])?;
//!
//! let ranked = profile_trace(["0", "0", "0x1", "5", "6", "99"], &index)?;
//! assert_eq!(ranked[0], RankedScope::new("a.b", 3));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
