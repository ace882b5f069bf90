//! Whole-document tests: the kitchen-sink fixture, mixed documents and
//! re-parsing each definition from its own recorded location.

use crate::DefinitionKind;
use crate::Location;
use crate::ast;
use crate::parse_str;
use crate::tests::utils::KITCHEN_SINK;
use crate::tests::utils::parse_ok;

#[test]
fn kitchen_sink_parses() {
    let doc = parse_ok(KITCHEN_SINK);
    assert_eq!(doc.location, Location::new(0, KITCHEN_SINK.len()));
    assert_eq!(doc.executable_definitions().count(), 5);
    assert_eq!(doc.type_system_definitions().count(), 18);
    assert_eq!(doc.definitions.len(), 23);
}

#[test]
fn kitchen_sink_definition_kinds() {
    use DefinitionKind::*;

    let doc = parse_ok(KITCHEN_SINK);
    let kinds: Vec<DefinitionKind> = doc.definitions.iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        [
            Operation,
            Operation,
            Operation,
            Fragment,
            Operation,
            Schema,
            ObjectType,
            ObjectType,
            InterfaceType,
            InterfaceType,
            UnionType,
            UnionType,
            ScalarType,
            ScalarType,
            EnumType,
            EnumType,
            InputObjectType,
            InputObjectType,
            TypeExtension,
            TypeExtension,
            ObjectType,
            Directive,
            Directive,
        ],
    );
}

/// Verifies the leading byte-order mark and license comment are skipped and
/// the first definition starts at `query`.
#[test]
fn kitchen_sink_first_definition_starts_after_comments() {
    let doc = parse_ok(KITCHEN_SINK);
    let first = &doc.definitions[0];
    let text = &KITCHEN_SINK[first.location().start..first.location().end];
    assert!(text.starts_with("query queryName($foo: ComplexType"), "{text}");
    assert!(text.ends_with('}'));
}

#[test]
fn kitchen_sink_operation_details() {
    let doc = parse_ok(KITCHEN_SINK);
    let operations: Vec<&ast::OperationDefinition<'_>> = doc.operations().collect();

    let kinds: Vec<ast::OperationKind> = operations.iter().map(|op| op.operation_kind).collect();
    assert_eq!(
        kinds,
        [
            ast::OperationKind::Query,
            ast::OperationKind::Mutation,
            ast::OperationKind::Subscription,
            ast::OperationKind::Query,
        ],
    );

    let query = operations[0];
    assert_eq!(query.variable_definitions.len(), 2);
    let Some(ast::Value::Enum(site)) = &query.variable_definitions[1].default_value else {
        panic!("expected an enum default");
    };
    assert_eq!(site.value, "MOBILE");

    let ast::Selection::Field(whoever) = &query.selection_set.selections[0] else {
        panic!("expected a field");
    };
    assert_eq!(whoever.response_key(), "whoever123is");
    assert_eq!(whoever.name.value, "node");
    let selections = &whoever.selection_set.as_ref().unwrap().selections;
    assert_eq!(selections.len(), 4);
    assert!(matches!(selections[1], ast::Selection::InlineFragment(_)));
    assert!(matches!(selections[2], ast::Selection::InlineFragment(_)));
    assert!(matches!(selections[3], ast::Selection::InlineFragment(_)));

    assert!(operations[3].is_shorthand());
}

/// Verifies that re-parsing the text of each top-level definition, as
/// delimited by its location, yields a single definition of the same kind.
#[test]
fn definitions_reparse_from_their_own_locations() {
    let doc = parse_ok(KITCHEN_SINK);
    for definition in &doc.definitions {
        let location = definition.location();
        let text = location.slice(KITCHEN_SINK).unwrap();
        let reparsed = match parse_str(text) {
            Ok(reparsed) => reparsed,
            Err(error) => panic!("{}", error.format_detailed(Some(text))),
        };
        assert_eq!(reparsed.definitions.len(), 1, "{text}");
        assert_eq!(reparsed.definitions[0].kind(), definition.kind(), "{text}");
        assert_eq!(
            reparsed.definitions[0].location(),
            Location::new(0, text.len()),
            "{text}",
        );
    }
}

/// Verifies definitions may follow one another without separators.
#[test]
fn adjacent_definitions() {
    let doc = parse_ok("type A{a:Int}type B{b:Int}{a}");
    assert_eq!(doc.definitions.len(), 3);
    assert_eq!(doc.definitions[1].location(), Location::new(13, 26));
}
