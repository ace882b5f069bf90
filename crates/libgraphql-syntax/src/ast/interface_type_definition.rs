use crate::Location;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::FieldDefinition;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::StringValue;
use inherent::inherent;

/// `interface Name implements A @directives { fields }`
///
/// See
/// [Interfaces](https://spec.graphql.org/September2025/#sec-Interfaces).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InterfaceTypeDefinition<'src> {
    pub description: Option<StringValue<'src>>,
    pub name: Name<'src>,
    pub interfaces: Vec<NamedType<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
    pub location: Location,
}

#[inherent]
impl AstNode for InterfaceTypeDefinition<'_> {
    pub fn location(&self) -> Location {
        self.location
    }
}
