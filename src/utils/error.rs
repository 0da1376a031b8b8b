//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building the debug-info index
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Malformed instruction offset {key:?}: not a base-10 integer")]
    MalformedOffset { key: String },

    #[error("Invalid instruction location at offset {key:?}: {source}")]
    InvalidEntry {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Program JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur while reading and aggregating a trace
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Invalid pc value {value:?} at row {row}")]
    InvalidPcFormat { row: u64, value: String },

    #[error("Trace has no 'pc' column")]
    MissingPcColumn,

    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors raised when a required input cannot be opened
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Missing or unreadable input {}: {source}", .path.display())]
    Missing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while loading a program file from disk
#[derive(Error, Debug)]
pub enum ProgramLoadError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
