use crate::Location;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::NamedType;
use crate::ast::OperationKind;
use crate::ast::StringValue;
use inherent::inherent;

/// `schema @directives { query: Query mutation: Mutation }`
///
/// See
/// [Schema](https://spec.graphql.org/September2025/#sec-Schema).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SchemaDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub operation_types: Vec<OperationTypeDefinition<'src>>,
    pub location: Location,
}

/// One `operation: Type` entry of a [`SchemaDefinition`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OperationTypeDefinition<'src> {
    pub operation_kind: OperationKind,
    pub named_type: NamedType<'src>,
    pub location: Location,
}

#[inherent]
impl AstNode for SchemaDefinition<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

#[inherent]
impl AstNode for OperationTypeDefinition<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}
