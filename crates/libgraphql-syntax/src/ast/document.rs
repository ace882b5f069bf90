use crate::DefinitionKind;
use crate::Location;
use crate::ast::AstNode;
use crate::ast::DirectiveDefinition;
use crate::ast::EnumTypeDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::ObjectTypeDefinition;
use crate::ast::OperationDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::TypeExtensionDefinition;
use crate::ast::UnionTypeDefinition;
use inherent::inherent;

// =========================================================
// Document
// =========================================================

/// Root node of a parsed GraphQL document.
///
/// A single `Document` type represents executable documents, schema
/// documents and documents mixing both; which definitions are acceptable
/// for a given purpose is left to downstream consumers.
///
/// `location` spans the whole input (`0..body.len()`), so it is `{0, 0}`
/// for an empty body. Every definition's location lies within it.
///
/// See
/// [Document](https://spec.graphql.org/September2025/#sec-Document).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Document<'src> {
    pub definitions: Vec<Definition<'src>>,
    pub location: Location,
}

impl<'src> Document<'src> {
    /// Iterates over the operations and fragments in source order.
    pub fn executable_definitions(
        &self,
    ) -> impl Iterator<Item = &Definition<'src>> {
        self.definitions.iter().filter(|d| d.kind().is_executable())
    }

    /// Iterates over schema, type, extension and directive definitions in
    /// source order.
    pub fn type_system_definitions(
        &self,
    ) -> impl Iterator<Item = &Definition<'src>> {
        self.definitions.iter().filter(|d| !d.kind().is_executable())
    }

    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition<'src>> {
        self.definitions.iter().filter_map(|d| match d {
            Definition::OperationDefinition(op) => Some(op),
            _ => None,
        })
    }
}

// =========================================================
// Definition
// =========================================================

/// A top-level definition, in the order it appears in the source.
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Definition<'src> {
    DirectiveDefinition(DirectiveDefinition<'src>),
    EnumTypeDefinition(EnumTypeDefinition<'src>),
    FragmentDefinition(FragmentDefinition<'src>),
    InputObjectTypeDefinition(InputObjectTypeDefinition<'src>),
    InterfaceTypeDefinition(InterfaceTypeDefinition<'src>),
    ObjectTypeDefinition(ObjectTypeDefinition<'src>),
    OperationDefinition(OperationDefinition<'src>),
    ScalarTypeDefinition(ScalarTypeDefinition<'src>),
    SchemaDefinition(SchemaDefinition<'src>),
    TypeExtensionDefinition(TypeExtensionDefinition<'src>),
    UnionTypeDefinition(UnionTypeDefinition<'src>),
}

impl Definition<'_> {
    pub fn kind(&self) -> DefinitionKind {
        match self {
            Definition::DirectiveDefinition(_) => DefinitionKind::Directive,
            Definition::EnumTypeDefinition(_) => DefinitionKind::EnumType,
            Definition::FragmentDefinition(_) => DefinitionKind::Fragment,
            Definition::InputObjectTypeDefinition(_) => DefinitionKind::InputObjectType,
            Definition::InterfaceTypeDefinition(_) => DefinitionKind::InterfaceType,
            Definition::ObjectTypeDefinition(_) => DefinitionKind::ObjectType,
            Definition::OperationDefinition(_) => DefinitionKind::Operation,
            Definition::ScalarTypeDefinition(_) => DefinitionKind::ScalarType,
            Definition::SchemaDefinition(_) => DefinitionKind::Schema,
            Definition::TypeExtensionDefinition(_) => DefinitionKind::TypeExtension,
            Definition::UnionTypeDefinition(_) => DefinitionKind::UnionType,
        }
    }
}

#[inherent]
impl AstNode for Document<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

#[inherent]
impl AstNode for Definition<'_> {
    pub fn location(&self) -> Location {
        match self {
            Definition::DirectiveDefinition(d) => d.location,
            Definition::EnumTypeDefinition(d) => d.location,
            Definition::FragmentDefinition(d) => d.location,
            Definition::InputObjectTypeDefinition(d) => d.location,
            Definition::InterfaceTypeDefinition(d) => d.location,
            Definition::ObjectTypeDefinition(d) => d.location,
            Definition::OperationDefinition(d) => d.location,
            Definition::ScalarTypeDefinition(d) => d.location,
            Definition::SchemaDefinition(d) => d.location,
            Definition::TypeExtensionDefinition(d) => d.location,
            Definition::UnionTypeDefinition(d) => d.location,
        }
    }
}
