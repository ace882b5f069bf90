//! The GraphQL abstract syntax tree.
//!
//! Every node is plain owned data tagged by its Rust type (or enum variant)
//! and carries exactly one [`Location`](crate::Location): the half-open
//! byte range of source text it was parsed from. A child's location always
//! lies within its parent's.
//!
//! Identifier and literal text is held as [`Cow<'src, str>`], borrowing
//! from the source whenever no decoding was needed.
//!
//! # Example
//!
//! ```
//! use libgraphql_syntax::ast::Definition;
//! use libgraphql_syntax::ast::Selection;
//!
//! let doc = libgraphql_syntax::parse_str("{ hero { name } }").unwrap();
//! let Definition::OperationDefinition(op) = &doc.definitions[0] else {
//!     panic!("expected an operation");
//! };
//! let Selection::Field(hero) = &op.selection_set.selections[0] else {
//!     panic!("expected a field");
//! };
//! assert_eq!(hero.name.value, "hero");
//! ```
//!
//! [`Cow<'src, str>`]: std::borrow::Cow

mod ast_node;
mod directive;
mod directive_definition;
mod document;
mod enum_type_definition;
mod field;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod input_object_type_definition;
mod input_value_definition;
mod interface_type_definition;
mod name;
mod object_type_definition;
mod operation_definition;
mod operation_kind;
mod scalar_type_definition;
mod schema_definition;
mod selection_set;
mod type_annotation;
mod type_extension_definition;
mod union_type_definition;
mod values;

pub use ast_node::AstNode;
pub use directive::Argument;
pub use directive::Directive;
pub use directive_definition::DirectiveDefinition;
pub use directive_definition::DirectiveLocation;
pub use directive_definition::DirectiveLocationKind;
pub use document::Definition;
pub use document::Document;
pub use enum_type_definition::EnumTypeDefinition;
pub use enum_type_definition::EnumValueDefinition;
pub use field::Field;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use input_object_type_definition::InputObjectTypeDefinition;
pub use input_value_definition::InputValueDefinition;
pub use interface_type_definition::InterfaceTypeDefinition;
pub use name::Name;
pub use object_type_definition::FieldDefinition;
pub use object_type_definition::ObjectTypeDefinition;
pub use operation_definition::OperationDefinition;
pub use operation_definition::VariableDefinition;
pub use operation_kind::OperationKind;
pub use scalar_type_definition::ScalarTypeDefinition;
pub use schema_definition::OperationTypeDefinition;
pub use schema_definition::SchemaDefinition;
pub use selection_set::Selection;
pub use selection_set::SelectionSet;
pub use type_annotation::ListType;
pub use type_annotation::NamedType;
pub use type_annotation::NonNullType;
pub use type_annotation::NullableType;
pub use type_annotation::TypeAnnotation;
pub use type_extension_definition::TypeExtensionDefinition;
pub use union_type_definition::UnionTypeDefinition;
pub use values::BooleanValue;
pub use values::EnumValue;
pub use values::FloatValue;
pub use values::IntValue;
pub use values::ListValue;
pub use values::NullValue;
pub use values::ObjectField;
pub use values::ObjectValue;
pub use values::StringValue;
pub use values::Value;
pub use values::Variable;

#[cfg(test)]
mod tests;
