use cairo_trace_profiler::parser::{load_program, parse_pc, parse_program, DebugEntry};
use cairo_trace_profiler::utils::{IndexError, InputError, ProgramLoadError, TraceError};
use serde_json::json;
use std::io::Write;

#[test]
fn test_parse_program_reads_scopes_and_length() {
    let program = json!({
        "prime": "0x800000000000011000000000000000000000000000000000000000000000001",
        "data": ["0x40780017fff7fff", "0x1", "0x208b7fff7fff7ffe"],
        "debug_info": {
            "file_contents": {},
            "instruction_locations": {
                "0": {
                    "accessible_scopes": ["__main__", "__main__.main"],
                    "flow_tracking_data": { "ap_tracking": { "group": 0, "offset": 0 } },
                    "hints": [],
                    "inst": { "start_line": 3, "end_line": 3 }
                },
                "2": {
                    "accessible_scopes": ["__main__", "__main__.main", "__main__.main.inner"]
                }
            }
        }
    });

    let loaded = parse_program(program.to_string().as_bytes()).unwrap();

    assert_eq!(loaded.metadata.instruction_count, 3);
    assert_eq!(loaded.index.len(), 2);
    assert_eq!(
        loaded.index.lookup(2).and_then(DebugEntry::innermost_scope),
        Some("__main__.main.inner")
    );
    assert_eq!(
        loaded.index.lookup(0).unwrap().scopes,
        vec!["__main__".to_string(), "__main__.main".to_string()]
    );
}

#[test]
fn test_parse_program_without_debug_info() {
    let loaded = parse_program(json!({ "data": [1, 2] }).to_string().as_bytes()).unwrap();
    assert_eq!(loaded.metadata.instruction_count, 2);
    assert!(loaded.index.is_empty());

    let loaded = parse_program(json!({}).to_string().as_bytes()).unwrap();
    assert_eq!(loaded.metadata.instruction_count, 0);
}

#[test]
fn test_missing_accessible_scopes_is_empty() {
    let program = json!({ "debug_info": { "instruction_locations": { "4": {} } } });
    let loaded = parse_program(program.to_string().as_bytes()).unwrap();
    assert!(loaded.index.lookup(4).unwrap().scopes.is_empty());
}

#[test]
fn test_parse_program_malformed_offset() {
    let program = json!({
        "data": [],
        "debug_info": { "instruction_locations": { "twelve": { "accessible_scopes": ["a"] } } }
    });

    let err = parse_program(program.to_string().as_bytes()).unwrap_err();
    assert!(matches!(err, IndexError::MalformedOffset { ref key } if key == "twelve"));
}

#[test]
fn test_parse_program_rejects_non_object() {
    let err = parse_program("[1, 2, 3]".as_bytes()).unwrap_err();
    assert!(matches!(err, IndexError::Json(_)));
}

#[test]
fn test_load_program_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"data": [0], "debug_info": {{"instruction_locations": {{"0": {{"accessible_scopes": ["m.f"]}}}}}}}}"#
    )
    .unwrap();

    let loaded = load_program(file.path()).unwrap();
    assert_eq!(loaded.index.lookup(0).and_then(DebugEntry::innermost_scope), Some("m.f"));
}

#[test]
fn test_load_program_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_program(dir.path().join("program.json")).unwrap_err();
    assert!(matches!(err, ProgramLoadError::Input(InputError::Missing { .. })));
}

#[test]
fn test_parse_pc() {
    assert_eq!(parse_pc("1000", 1).unwrap(), 1000);
    assert_eq!(parse_pc("0x3e8", 1).unwrap(), 1000);
    assert!(matches!(
        parse_pc("invalid", 9),
        Err(TraceError::InvalidPcFormat { row: 9, .. })
    ));
}
