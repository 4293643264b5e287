use super::*;
use crate::dom::memory::{MemoryDocument, MemoryElement};

#[test]
fn default_has_debug_on() {
    assert!(Config::default().debug);
}

#[test]
fn blank_json_yields_default() {
    assert_eq!(Config::from_json("  ").unwrap(), Config::default());
}

#[test]
fn json_can_disable_debug() {
    assert_eq!(Config::from_json(r#"{"debug": false}"#).unwrap(), Config { debug: false });
}

#[test]
fn empty_object_keeps_defaults() {
    assert_eq!(Config::from_json("{}").unwrap(), Config { debug: true });
}

#[test]
fn unknown_fields_are_rejected() {
    let err = Config::from_json(r#"{"verbose": true}"#).unwrap_err();
    assert!(err.to_string().starts_with("config parse failed"));
}

#[test]
fn malformed_json_is_an_error() {
    assert!(Config::from_json("{debug:").is_err());
}

#[test]
fn from_document_without_block_is_default() {
    let doc = MemoryDocument::new();
    assert_eq!(Config::from_document(&doc).unwrap(), Config::default());
}

#[test]
fn from_document_reads_block_text() {
    let doc = MemoryDocument::new();
    doc.append(MemoryElement::new("script").with_attr("data-folio-config", "").with_text(r#"{"debug": false}"#));
    assert_eq!(Config::from_document(&doc).unwrap(), Config { debug: false });
}
