//! Trace record parsing.
//!
//! A trace is a CSV file with a header row and at least a `pc` column.
//! Rows are streamed one at a time; nothing is buffered beyond the
//! current record.

use super::debug_info::DebugInfoIndex;
use crate::aggregator::{aggregate_records, ScopeCounts};
use crate::utils::config::{HEX_PREFIX, PC_COLUMN};
use crate::utils::error::{InputError, TraceError};
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Parse a pc value from hex (`0x` prefix) or decimal string
///
/// **Public** - used by the aggregator for every trace record
///
/// # Arguments
/// * `value` - Raw pc text
/// * `row` - 1-based ordinal of the record, reported on failure
///
/// # Errors
/// * `TraceError::InvalidPcFormat` - value is not valid in the selected base
pub fn parse_pc(value: &str, row: u64) -> Result<u64, TraceError> {
    let invalid = || TraceError::InvalidPcFormat {
        row,
        value: value.to_string(),
    };

    match value.strip_prefix(HEX_PREFIX) {
        // from_str_radix would take a sign after the prefix ("0x+5")
        Some(hex) if hex.starts_with(['+', '-']) => Err(invalid()),
        Some(hex) => u64::from_str_radix(hex, 16).map_err(|_| invalid()),
        None => value.parse::<u64>().map_err(|_| invalid()),
    }
}

/// Streaming iterator over the `pc` column of a CSV trace
///
/// The header is read lazily on the first call to `next`. A completely
/// empty input is an empty trace. Iteration stops after the first error.
pub struct PcRecords<R> {
    reader: csv::Reader<R>,
    record: csv::StringRecord,
    column: Option<usize>,
    finished: bool,
}

impl<R: Read> PcRecords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: csv::ReaderBuilder::new()
                .has_headers(true)
                .from_reader(reader),
            record: csv::StringRecord::new(),
            column: None,
            finished: false,
        }
    }

    /// Locate the pc column, or `None` for an input with no header at all
    fn pc_column(&mut self) -> Result<Option<usize>, TraceError> {
        if let Some(column) = self.column {
            return Ok(Some(column));
        }

        let headers = self.reader.headers()?;
        if headers.is_empty() {
            return Ok(None);
        }

        let column = headers
            .iter()
            .position(|name| name == PC_COLUMN)
            .ok_or(TraceError::MissingPcColumn)?;
        self.column = Some(column);
        Ok(Some(column))
    }

    fn next_pc(&mut self) -> Result<Option<String>, TraceError> {
        let Some(column) = self.pc_column()? else {
            return Ok(None);
        };

        if !self.reader.read_record(&mut self.record)? {
            return Ok(None);
        }

        Ok(Some(self.record.get(column).unwrap_or_default().to_string()))
    }
}

impl<R: Read> Iterator for PcRecords<R> {
    type Item = Result<String, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let next = self.next_pc().transpose();
        if !matches!(next, Some(Ok(_))) {
            self.finished = true;
        }
        next
    }
}

/// Stream a CSV trace straight into per-scope step counts
///
/// **Public** - CSV counterpart of [`crate::aggregator::aggregate`]
///
/// # Errors
/// * `TraceError::MissingPcColumn` - header has no `pc` column
/// * `TraceError::InvalidPcFormat` - first row whose pc fails to parse
/// * `TraceError::Csv` - malformed CSV
pub fn aggregate_csv<R: Read>(reader: R, index: &DebugInfoIndex) -> Result<ScopeCounts, TraceError> {
    aggregate_records(PcRecords::new(reader), index)
}

/// Open a CSV trace file for streaming
///
/// **Public** - used by the profile command
///
/// # Errors
/// * `InputError::Missing` - file missing or unreadable
pub fn open_trace(path: impl AsRef<Path>) -> Result<PcRecords<File>, InputError> {
    let path = path.as_ref();
    debug!("Opening trace: {}", path.display());

    let file = File::open(path).map_err(|source| InputError::Missing {
        path: path.to_path_buf(),
        source,
    })?;

    // csv::Reader buffers internally
    Ok(PcRecords::new(file))
}
