use serde_json::{Value, json};
use timetracker_migrate::core::{Registry, migrate};
use timetracker_migrate::errors::AppError;
use timetracker_migrate::models::VersionedDocument;

#[test]
fn test_invalid_json_is_reported_as_such() {
    let err = VersionedDocument::parse("{ \"Version\": ").unwrap_err();
    assert!(matches!(err, AppError::InvalidJson(_)));
}

#[test]
fn test_missing_envelope_fields_are_malformed() {
    for text in [
        r#"{ "TrackerEntries": {} }"#,
        r#"{ "Version": "v1" }"#,
        r#"{ "Version": "v1", "TrackerEntries": [] }"#,
        r#"[1, 2, 3]"#,
    ] {
        let err = VersionedDocument::parse(text).unwrap_err();
        assert!(
            matches!(err, AppError::MalformedDocument(_)),
            "{} -> {:?}",
            text,
            err
        );
    }
}

#[test]
fn test_misspelled_version_field_is_reconciled() {
    // shape already aggregated by the older script, but `Version` never advanced
    let text = json!({
        "Version": "v1_0_0",
        "TrackerEntries": {
            "2024-01-01": [ { "Name": "A", "SubEntries": [ { "Start": 1, "End": 2 } ] } ]
        },
        "Verion": "v1_0_1"
    })
    .to_string();

    let doc = VersionedDocument::parse(&text).expect("parse");
    assert_eq!(doc.version, "v1_0_1");
    assert!(doc.reconciled);
    assert!(!doc.extra.contains_key("Verion"));

    let outcome = migrate(doc, &Registry::builtin()).expect("migrate");
    assert!(outcome.applied.is_empty());
    assert!(outcome.changed());

    let written: Value = serde_json::from_str(&outcome.document.to_json(true).unwrap()).unwrap();
    assert_eq!(written["Version"], "v1_0_1");
    assert!(written.get("Verion").is_none());
}

#[test]
fn test_non_string_misspelled_version_is_malformed() {
    let text = r#"{ "Version": "v1", "TrackerEntries": {}, "Verion": 2 }"#;
    assert!(matches!(
        VersionedDocument::parse(text),
        Err(AppError::MalformedDocument(_))
    ));
}

#[test]
fn test_version_is_written_under_version_key() {
    let doc = VersionedDocument::parse(r#"{ "Version": "v1", "TrackerEntries": {} }"#).unwrap();
    let outcome = migrate(doc, &Registry::builtin()).unwrap();

    let written: Value = serde_json::from_str(&outcome.document.to_json(false).unwrap()).unwrap();
    assert_eq!(written, json!({ "Version": "v2", "TrackerEntries": {} }));
}

#[test]
fn test_top_level_key_order_is_kept() {
    let text = r#"{"Extra":1,"TrackerEntries":{},"Version":"v1","Last":true}"#;
    let doc = VersionedDocument::parse(text).unwrap();
    let outcome = migrate(doc, &Registry::builtin()).unwrap();

    assert_eq!(
        outcome.document.to_json(false).unwrap(),
        r#"{"Extra":1,"TrackerEntries":{},"Version":"v2","Last":true}"#
    );
}

#[test]
fn test_reconciled_key_is_dropped_from_output_order() {
    let text = r#"{"Verion":"v1_0_1","Version":"v1_0_0","TrackerEntries":{}}"#;
    let doc = VersionedDocument::parse(text).unwrap();

    assert_eq!(
        doc.to_json(false).unwrap(),
        r#"{"Version":"v1_0_1","TrackerEntries":{}}"#
    );
}
