//! Offset -> scope lookup table built from compiler debug metadata.

use super::schema::{InstructionLocation, ProgramFile};
use crate::utils::error::{IndexError, InputError, ProgramLoadError};
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Debug information recorded for a single instruction offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugEntry {
    pub offset: u64,

    /// Enclosing scopes in compiler order; the last one is the innermost
    pub scopes: Vec<String>,
}

impl DebugEntry {
    /// Most specific enclosing scope, if any
    pub fn innermost_scope(&self) -> Option<&str> {
        self.scopes.last().map(String::as_str)
    }
}

/// Read-only map from instruction offset to its debug entry
///
/// Only constructors mutate the table; once built it is shared by reference.
#[derive(Debug, Clone, Default)]
pub struct DebugInfoIndex {
    entries: HashMap<u64, DebugEntry>,
}

impl DebugInfoIndex {
    /// Build an index from `(offset key, location)` pairs
    ///
    /// **Public** - main constructor
    ///
    /// Keys are base-10 integers. When two keys parse to the same offset
    /// (e.g. "007" and "7") the later pair wins.
    ///
    /// # Errors
    /// * `IndexError::MalformedOffset` - a key is not a non-negative integer
    pub fn build<I, K>(locations: I) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = (K, InstructionLocation)>,
        K: AsRef<str>,
    {
        let mut index = Self::default();
        for (key, location) in locations {
            index.insert(key.as_ref(), location)?;
        }

        debug!("Built debug info index with {} offsets", index.len());
        Ok(index)
    }

    /// Build an index from the raw `instruction_locations` JSON object
    ///
    /// **Public** - used by the program loader
    ///
    /// Each record is validated against [`InstructionLocation`] before use.
    ///
    /// # Errors
    /// * `IndexError::MalformedOffset` - a key is not a non-negative integer
    /// * `IndexError::InvalidEntry` - a record does not match the schema
    pub fn from_json_locations(
        locations: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<Self, IndexError> {
        let mut index = Self::default();
        for (key, raw) in locations {
            let location = InstructionLocation::deserialize(raw).map_err(|source| {
                IndexError::InvalidEntry {
                    key: key.clone(),
                    source,
                }
            })?;
            index.insert(key, location)?;
        }

        debug!("Built debug info index with {} offsets", index.len());
        Ok(index)
    }

    /// Exact-match lookup
    pub fn lookup(&self, offset: u64) -> Option<&DebugEntry> {
        self.entries.get(&offset)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: &str, location: InstructionLocation) -> Result<(), IndexError> {
        let offset = parse_offset(key)?;
        self.entries.insert(
            offset,
            DebugEntry {
                offset,
                scopes: location.accessible_scopes,
            },
        );
        Ok(())
    }
}

/// Parse a debug-info key as a base-10 offset
///
/// **Private** - internal helper for index construction
fn parse_offset(key: &str) -> Result<u64, IndexError> {
    key.parse::<u64>()
        .map_err(|_| IndexError::MalformedOffset {
            key: key.to_string(),
        })
}

/// Program-level facts carried next to the index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgramMetadata {
    /// Length of the program's `data` array
    pub instruction_count: usize,
}

impl ProgramMetadata {
    /// Whether `offset` addresses an instruction of this program
    pub fn contains(&self, offset: u64) -> bool {
        usize::try_from(offset).is_ok_and(|o| o < self.instruction_count)
    }
}

/// Everything the profiler needs from a program file
#[derive(Debug, Clone)]
pub struct LoadedProgram {
    pub index: DebugInfoIndex,
    pub metadata: ProgramMetadata,
}

/// Parse program JSON from a reader
///
/// **Public** - schema boundary for program metadata
///
/// A program without `debug_info` yields an empty index.
///
/// # Errors
/// * `IndexError::Json` - input is not a program object
/// * `IndexError::MalformedOffset` / `IndexError::InvalidEntry` - bad debug info
pub fn parse_program<R: Read>(reader: R) -> Result<LoadedProgram, IndexError> {
    let program: ProgramFile = serde_json::from_reader(reader)?;
    let metadata = ProgramMetadata {
        instruction_count: program.data.len(),
    };

    let index = match program
        .debug_info
        .and_then(|info| info.instruction_locations)
    {
        Some(locations) => DebugInfoIndex::from_json_locations(&locations)?,
        None => {
            debug!("Program has no instruction locations; every pc will be unmapped");
            DebugInfoIndex::default()
        }
    };

    debug!(
        "Loaded program: {} instructions, {} debug offsets",
        metadata.instruction_count,
        index.len()
    );

    Ok(LoadedProgram { index, metadata })
}

/// Load a program file from disk
///
/// **Public** - used by the profile command
///
/// # Errors
/// * `ProgramLoadError::Input` - file missing or unreadable
/// * `ProgramLoadError::Index` - file contents rejected by [`parse_program`]
pub fn load_program(path: impl AsRef<Path>) -> Result<LoadedProgram, ProgramLoadError> {
    let path = path.as_ref();
    debug!("Reading program from: {}", path.display());

    let file = File::open(path).map_err(|source| InputError::Missing {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_program(BufReader::new(file))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_and_lookup() {
        let index = DebugInfoIndex::build([
            ("0", InstructionLocation::new(["__main__", "__main__.main"])),
            ("3", InstructionLocation::default()),
        ])
        .unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(
            index.lookup(0).and_then(DebugEntry::innermost_scope),
            Some("__main__.main")
        );
        assert_eq!(index.lookup(3).and_then(DebugEntry::innermost_scope), None);
        assert!(index.lookup(1).is_none());
    }

    #[test]
    fn test_malformed_offset() {
        for key in ["abc", "-1", "", "1.5", "0x10"] {
            let err = DebugInfoIndex::build([(key, InstructionLocation::default())]).unwrap_err();
            assert!(
                matches!(&err, IndexError::MalformedOffset { key: k } if k == key),
                "unexpected error for {key:?}: {err}"
            );
        }
    }

    #[test]
    fn test_colliding_keys_last_write_wins() {
        let index = DebugInfoIndex::build([
            ("007", InstructionLocation::new(["first"])),
            ("7", InstructionLocation::new(["second"])),
        ])
        .unwrap();

        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup(7).unwrap().scopes, vec!["second".to_string()]);
    }

    #[test]
    fn test_json_collision_follows_document_order() {
        let raw = r#"{"7": {"accessible_scopes": ["first"]}, "007": {"accessible_scopes": ["second"]}}"#;
        let locations: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(raw).unwrap();

        let index = DebugInfoIndex::from_json_locations(&locations).unwrap();
        assert_eq!(index.lookup(7).and_then(DebugEntry::innermost_scope), Some("second"));
    }

    #[test]
    fn test_invalid_entry_shape() {
        let locations = json!({ "4": { "accessible_scopes": "not-a-list" } });
        let err = DebugInfoIndex::from_json_locations(locations.as_object().unwrap()).unwrap_err();
        assert!(matches!(err, IndexError::InvalidEntry { ref key, .. } if key == "4"));
    }

    #[test]
    fn test_metadata_contains() {
        let metadata = ProgramMetadata { instruction_count: 3 };
        assert!(metadata.contains(0));
        assert!(metadata.contains(2));
        assert!(!metadata.contains(3));
        assert!(!metadata.contains(u64::MAX));
    }
}
