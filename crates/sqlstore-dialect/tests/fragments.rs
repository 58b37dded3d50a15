//! Per-engine fragment matrix through the public API.

use std::collections::HashSet;

use sqlstore_dialect::{DialectAdapter, DialectError, EngineKind};

fn adapters() -> Vec<DialectAdapter> {
    vec![
        DialectAdapter::from_tag("postgres", "postgres://localhost/boards").unwrap(),
        DialectAdapter::from_tag("mysql", "focal:secret@tcp(localhost:3306)/boards").unwrap(),
        DialectAdapter::from_tag("sqlite3", "file:boards.db").unwrap(),
    ]
}

#[test]
fn test_engine_fragments_are_non_empty() {
    for adapter in adapters() {
        assert!(!adapter.quote_identifier("name").is_empty());
        assert!(!adapter.placeholder(1).is_empty());
        assert!(!adapter.concat_aggregate("name", ",").is_empty());
        assert!(!adapter.contains_predicate(1, "name").is_empty());
    }
}

#[test]
fn test_placeholder_and_quote_styles() {
    let quotes: HashSet<String> = adapters()
        .iter()
        .map(|a| a.quote_identifier("name"))
        .collect();
    assert_eq!(
        quotes,
        HashSet::from(["\"name\"".to_string(), "`name`".to_string()])
    );

    let placeholders: Vec<String> = adapters().iter().map(|a| a.placeholder(2)).collect();
    assert_eq!(placeholders, ["$2", "?", "$2"]);
}

#[test]
fn test_concat_aggregate_matrix() {
    let got: Vec<String> = adapters()
        .iter()
        .map(|a| a.concat_aggregate("name", ","))
        .collect();
    assert_eq!(
        got,
        [
            "string_agg(name, ',')",
            "GROUP_CONCAT(name SEPARATOR ',')",
            "group_concat(name)",
        ]
    );
}

#[test]
fn test_contains_predicate_matrix() {
    let got: Vec<String> = adapters()
        .iter()
        .map(|a| a.contains_predicate(2, "b.fields"))
        .collect();
    assert_eq!(
        got,
        [
            "position($2 in b.fields) > 0",
            "instr(b.fields, ?) > 0",
            "instr(b.fields, $2) > 0",
        ]
    );
}

#[test]
fn test_engine_tags_round_trip_through_adapter() {
    for adapter in adapters() {
        let engine = adapter.engine();
        assert_eq!(engine.tag().parse::<EngineKind>().unwrap(), engine);
        assert_eq!(engine.dialect().name(), adapter.dialect().name());
    }
}

#[test]
fn test_unsupported_engine_fails_loudly() {
    for tag in ["oracle", "mssql", ""] {
        let err = DialectAdapter::from_tag(tag, "oracle://localhost").unwrap_err();
        assert!(
            matches!(err, DialectError::UnsupportedDialect(_)),
            "tag {tag:?} gave {err}"
        );
    }
}

#[test]
fn test_malformed_interval_is_recoverable() {
    let adapter = adapters().remove(0);
    let err = adapter.relative_timestamp("abc days").unwrap_err();
    assert!(err.to_string().contains("abc days"));
    // The adapter keeps working after the error.
    assert!(adapter.relative_timestamp("5 fortnights").is_ok());
}
