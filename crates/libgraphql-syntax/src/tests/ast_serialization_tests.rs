//! Tests for serializing parsed documents with `serde`.

use serde_json::Value as Json;
use serde_json::json;

use crate::DefinitionKind;
use crate::Location;
use crate::SourcePosition;
use crate::tests::utils::KITCHEN_SINK;
use crate::tests::utils::parse_ok;

fn kitchen_sink_json() -> Json {
    serde_json::to_value(parse_ok(KITCHEN_SINK)).unwrap()
}

#[test]
fn document_serializes_every_definition() {
    let json = kitchen_sink_json();
    let definitions = json["definitions"].as_array().unwrap();
    assert_eq!(definitions.len(), 23);
    assert_eq!(
        json["location"],
        json!({ "start": 0, "end": KITCHEN_SINK.len() }),
    );
}

#[test]
fn operation_serializes_kind_name_and_location() {
    let json = kitchen_sink_json();
    let operation = &json["definitions"][0]["OperationDefinition"];
    assert_eq!(operation["operation_kind"], "Query");
    assert_eq!(operation["name"]["value"], "queryName");
    assert_eq!(operation["location"]["start"], 291);
    assert_eq!(operation["name"]["location"], json!({ "start": 297, "end": 306 }));

    let kinds: Vec<&Json> = json["definitions"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|d| d.get("OperationDefinition"))
        .map(|op| &op["operation_kind"])
        .collect();
    assert_eq!(kinds, ["Query", "Mutation", "Subscription", "Query"]);
}

#[test]
fn directive_definition_serializes_locations() {
    let json = kitchen_sink_json();
    let skip = &json["definitions"][21]["DirectiveDefinition"];
    assert_eq!(skip["name"]["value"], "skip");
    assert_eq!(skip["repeatable"], false);
    assert_eq!(
        skip["locations"][0],
        json!({
            "kind": "Field",
            "location": { "start": 2513, "end": 2518 },
        }),
    );
    let kinds: Vec<&Json> = skip["locations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| &l["kind"])
        .collect();
    assert_eq!(kinds, ["Field", "FragmentSpread", "InlineFragment"]);
}

/// Verifies nested values keep their own locations in the output.
#[test]
fn nested_value_locations_serialize() {
    let doc = parse_ok("{ a(b: [1, $c]) }");
    let json = serde_json::to_value(&doc).unwrap();
    let argument = &json["definitions"][0]["OperationDefinition"]["selection_set"]
        ["selections"][0]["Field"]["arguments"][0];
    assert_eq!(argument["location"], json!({ "start": 4, "end": 14 }));
    let list = &argument["value"]["List"];
    assert_eq!(list["location"], json!({ "start": 7, "end": 14 }));
    assert_eq!(list["values"][0]["Int"]["value"], "1");
    assert_eq!(list["values"][1]["Variable"]["name"]["value"], "c");
}

#[test]
fn positions_and_kinds_serialize() {
    assert_eq!(
        serde_json::to_value(Location::new(3, 9)).unwrap(),
        json!({ "start": 3, "end": 9 }),
    );
    assert_eq!(
        serde_json::to_value(DefinitionKind::InputObjectType).unwrap(),
        "InputObjectType",
    );
    assert_eq!(
        serde_json::to_value(SourcePosition::new(2, 8, 20)).unwrap(),
        json!({ "line": 2, "column": 8, "byte_offset": 20 }),
    );
}
