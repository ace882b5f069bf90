use crate::Location;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::InputValueDefinition;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::StringValue;
use crate::ast::TypeAnnotation;
use inherent::inherent;

/// `type Name implements A & B @directives { fields }`
///
/// A missing body and an empty `{ }` body both yield an empty `fields`
/// list.
///
/// See
/// [Objects](https://spec.graphql.org/September2025/#sec-Objects).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ObjectTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub interfaces: Vec<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
    pub location: Location,
}

/// `name(arguments): Type @directives` inside an object or interface type.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FieldDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub field_type: TypeAnnotation<'src>,
    pub directives: Vec<Directive<'src>>,
    pub location: Location,
}

#[inherent]
impl AstNode for ObjectTypeDefinition<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}

#[inherent]
impl AstNode for FieldDefinition<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}
