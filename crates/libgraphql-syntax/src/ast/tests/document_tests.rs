//! Tests for [`Document`](crate::ast::Document) and
//! [`Definition`](crate::ast::Definition) helpers.

use crate::DefinitionKind;
use crate::parse_str;

const MIXED: &str = r#"
type Query { hero: Character }
query Hero { hero { ...Name } }
fragment Name on Character { name }
scalar Date
{ hero { name } }
directive @cached on FIELD
"#;

#[test]
fn definition_kinds_follow_source_order() {
    let doc = parse_str(MIXED).unwrap();
    let kinds: Vec<DefinitionKind> = doc.definitions.iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        [
            DefinitionKind::ObjectType,
            DefinitionKind::Operation,
            DefinitionKind::Fragment,
            DefinitionKind::ScalarType,
            DefinitionKind::Operation,
            DefinitionKind::Directive,
        ],
    );
}

#[test]
fn executable_and_type_system_definitions_partition_the_document() {
    let doc = parse_str(MIXED).unwrap();
    let executable: Vec<DefinitionKind> =
        doc.executable_definitions().map(|d| d.kind()).collect();
    let type_system: Vec<DefinitionKind> =
        doc.type_system_definitions().map(|d| d.kind()).collect();

    assert_eq!(
        executable,
        [DefinitionKind::Operation, DefinitionKind::Fragment, DefinitionKind::Operation],
    );
    assert_eq!(
        type_system,
        [DefinitionKind::ObjectType, DefinitionKind::ScalarType, DefinitionKind::Directive],
    );
}

#[test]
fn operations_yields_named_and_shorthand_operations() {
    let doc = parse_str(MIXED).unwrap();
    let operations: Vec<_> = doc.operations().collect();
    assert_eq!(operations.len(), 2);
    assert_eq!(operations[0].name.as_ref().map(|n| n.as_str()), Some("Hero"));
    assert!(!operations[0].is_shorthand());
    assert!(operations[1].name.is_none());
    assert!(operations[1].is_shorthand());
}

/// Verifies a document can be serialized for snapshotting or tooling.
#[test]
fn document_serializes() {
    fn assert_serialize<T: serde::Serialize>(_: &T) {}
    let doc = parse_str(MIXED).unwrap();
    assert_serialize(&doc);
}
